use serde::{Deserialize, Serialize};

use crate::errors::AssignmentHubError;

/// 统一的 API 响应结构：`{data, success}`
///
/// 业务失败同样以 `success: false` 返回，`error` 仅在基础设施故障时出现。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: T,
    pub success: bool,
}

impl ApiResponse<String> {
    pub fn message(message: impl Into<String>, success: bool) -> Self {
        Self {
            error: None,
            data: message.into(),
            success,
        }
    }

    /// 业务错误返回错误信息，基础设施错误额外标注错误类型
    pub fn from_error(err: &AssignmentHubError) -> Self {
        Self {
            error: (!err.is_business()).then(|| err.error_type().to_string()),
            data: err.message().to_string(),
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_error_payload() {
        let err = AssignmentHubError::duplicate_submission(
            "This group has already uploaded an assignment",
        );
        let json = serde_json::to_value(ApiResponse::from_error(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": "This group has already uploaded an assignment",
                "success": false
            })
        );
    }

    #[test]
    fn test_storage_error_payload() {
        let err = AssignmentHubError::storage_error("disk I/O error");
        let json = serde_json::to_value(ApiResponse::from_error(&err)).unwrap();
        assert_eq!(json["error"], "Storage Error");
        assert_eq!(json["data"], "disk I/O error");
        assert_eq!(json["success"], false);
    }
}
