use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::utils::error_response;

/// 班级没有小组时返回空数组
pub async fn list_class_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.list_assignment_summaries_by_class(class_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.list_assignments().await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(error_response(&e)),
    }
}
