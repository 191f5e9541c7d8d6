use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ClassService;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn list_groups(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_groups(&req, class_id.into_inner()).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/classes", web::get().to(list_classes))
        .route("/groups/{class_id}", web::get().to(list_groups));
}
