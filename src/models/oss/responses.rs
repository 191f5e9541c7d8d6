use serde::{Deserialize, Serialize};

/// 签名后的直传凭证，直接交给浏览器使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadPolicyResponse {
    #[serde(rename = "accessKeyId")]
    pub access_key_id: String,
    /// Base64 编码的策略文档
    pub policy: String,
    /// Base64 编码的 HMAC-SHA1 签名
    pub signature: String,
    pub expiration: String,
    /// 直传目标地址
    pub host: String,
}
