use actix_multipart::Multipart;
use actix_web::{FromRequest, HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::UploadAssignmentForm;
use crate::services::AssignmentService;
use crate::utils::{is_multipart, read_text_fields};

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 上传作品（urlencoded 或 multipart，字段可重复，按键值对接收）
pub async fn upload_assignment(
    req: HttpRequest,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    let pairs = if is_multipart(&req) {
        read_text_fields(&req, Multipart::new(req.headers(), payload)).await?
    } else {
        web::Form::<Vec<(String, String)>>::from_request(&req, &mut payload.into_inner())
            .await?
            .into_inner()
    };

    ASSIGNMENT_SERVICE
        .upload_assignment(&req, UploadAssignmentForm::from_pairs(pairs))
        .await
}

// 列出所有作品
pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(&req).await
}

// 按班级列出作品
pub async fn list_class_assignments(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_class_assignments(&req, class_id.into_inner())
        .await
}

// 查询小组提交状态
pub async fn is_uploaded(req: HttpRequest, group_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .is_uploaded(&req, group_id.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload", web::post().to(upload_assignment))
        .route("/assignments", web::get().to(list_assignments))
        .route(
            "/assignments/{class_id}",
            web::get().to(list_class_assignments),
        )
        .route("/is_uploaded/{group_id}", web::get().to(is_uploaded));
}
