pub mod policy;
pub mod signature;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::errors::{AssignmentHubError, Result};

pub use policy::UploadPolicySigner;

pub struct OssService;

impl OssService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config<'a>(&self, request: &'a HttpRequest) -> Result<&'a AppConfig> {
        request
            .app_data::<actix_web::web::Data<AppConfig>>()
            .map(|data| data.get_ref())
            .ok_or_else(|| AssignmentHubError::signature("Configuration not found in app data"))
    }

    /// 生成 OSS 直传签名
    pub async fn generate_signature(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        signature::generate_signature(self, request).await
    }
}
