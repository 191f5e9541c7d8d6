//! OSS 表单直传的上传策略与签名
//!
//! 策略文档经 Base64 编码后，用 AccessKeySecret 做 HMAC-SHA1 签名，
//! 浏览器携带 `policy` 与 `signature` 直接向存储桶上传，文件内容不经过本服务。

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::{Value, json};
use sha1::Sha1;

use crate::config::OssConfig;
use crate::errors::{AssignmentHubError, Result};
use crate::models::oss::responses::UploadPolicyResponse;

type HmacSha1 = Hmac<Sha1>;

/// 过期时间格式，精确到秒的 UTC 时间
pub const EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 策略文档，字段顺序即序列化顺序
#[derive(Debug, Serialize)]
struct PolicyDocument {
    expiration: String,
    conditions: Vec<Value>,
}

pub struct UploadPolicySigner<'a> {
    config: &'a OssConfig,
}

impl<'a> UploadPolicySigner<'a> {
    pub fn new(config: &'a OssConfig) -> Self {
        Self { config }
    }

    /// 以当前时间签发
    pub fn sign(&self) -> Result<UploadPolicyResponse> {
        self.sign_at(Utc::now())
    }

    /// 以指定时间签发
    pub fn sign_at(&self, now: DateTime<Utc>) -> Result<UploadPolicyResponse> {
        let expiration = self.expiration_at(now)?;

        let document = PolicyDocument {
            expiration: expiration.clone(),
            conditions: vec![
                json!({ "bucket": self.config.bucket }),
                json!(["content-length-range", 0, self.config.max_content_length]),
                json!(["in", "$Content-Type", self.config.allowed_content_types]),
            ],
        };

        let policy = STANDARD.encode(serde_json::to_string(&document)?);
        let signature = hmac_sha1_base64(&self.config.access_key_secret, &policy)?;

        Ok(UploadPolicyResponse {
            access_key_id: self.config.access_key_id.clone(),
            policy,
            signature,
            expiration,
            host: self.host(),
        })
    }

    fn expiration_at(&self, now: DateTime<Utc>) -> Result<String> {
        let timestamp = now.timestamp() + self.config.policy_expire_secs;
        DateTime::<Utc>::from_timestamp(timestamp, 0)
            .map(|at| at.format(EXPIRATION_FORMAT).to_string())
            .ok_or_else(|| AssignmentHubError::signature("Policy expiration is out of range"))
    }

    /// 直传地址：`https://{bucket}.{endpoint}`
    fn host(&self) -> String {
        let endpoint = self
            .config
            .endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{}.{}", self.config.bucket, endpoint)
    }
}

/// HMAC-SHA1 签名并 Base64 编码
pub fn hmac_sha1_base64(secret: &str, data: &str) -> Result<String> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| AssignmentHubError::signature(format!("Invalid HMAC key: {e}")))?;
    mac.update(data.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
