use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::errors::AssignmentHubError;
use crate::models::ApiResponse;

/// 将错误转换为 HTTP 响应
///
/// 业务错误：200 + `success: false`；基础设施错误：500 + 错误类型。
pub fn error_response(err: &AssignmentHubError) -> HttpResponse {
    if err.is_business() {
        warn!("Request rejected: {}", err);
        HttpResponse::Ok().json(ApiResponse::from_error(err))
    } else {
        #[cfg(debug_assertions)]
        error!("{}", err.format_colored());
        #[cfg(not(debug_assertions))]
        error!("{}", err);
        HttpResponse::InternalServerError().json(ApiResponse::from_error(err))
    }
}
