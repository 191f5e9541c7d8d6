use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::storage::Storage;
use crate::utils::error_response;

/// 小组是否已经提交过作品，只依据计数，不读取记录内容
pub async fn has_submitted(storage: &dyn Storage, group_id: i64) -> Result<bool> {
    Ok(storage.count_assignments_by_group(group_id).await? > 0)
}

/// `success: true` 表示尚未提交，可以上传
pub async fn is_uploaded(
    service: &AssignmentService,
    request: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match has_submitted(storage.as_ref(), group_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::message(
            "Group has already uploaded an assignment",
            false,
        ))),
        Ok(false) => Ok(HttpResponse::Ok().json(ApiResponse::message(
            "Group has not uploaded an assignment",
            true,
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
