use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::utils::error_response;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(classes)),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 班级不存在或没有小组时返回空数组
pub async fn list_groups(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.list_groups_by_class(class_id).await {
        Ok(groups) => Ok(HttpResponse::Ok().json(groups)),
        Err(e) => Ok(error_response(&e)),
    }
}
