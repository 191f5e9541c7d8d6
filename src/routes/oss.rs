use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::OssService;

// 懒加载的全局 OssService 实例
static OSS_SERVICE: Lazy<OssService> = Lazy::new(OssService::new_lazy);

pub async fn generate_signature(req: HttpRequest) -> ActixResult<HttpResponse> {
    OSS_SERVICE.generate_signature(&req).await
}

// 配置路由
pub fn configure_oss_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-oss-signature", web::get().to(generate_signature));
}
