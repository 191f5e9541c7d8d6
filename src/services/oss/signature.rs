use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{OssService, UploadPolicySigner};
use crate::utils::error_response;

pub async fn generate_signature(
    service: &OssService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = match service.get_config(request) {
        Ok(config) => config,
        Err(e) => return Ok(error_response(&e)),
    };

    match UploadPolicySigner::new(&config.oss).sign() {
        Ok(policy) => {
            debug!("Issued upload policy expiring at {}", policy.expiration);
            Ok(HttpResponse::Ok().json(policy))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
