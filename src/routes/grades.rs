use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::GradeForm;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn submit_grade(req: HttpRequest, form: web::Form<GradeForm>) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.submit_grade(&req, form.into_inner()).await
}

pub async fn current_average(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .current_average(&req, assignment_id.into_inner())
        .await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/grade", web::post().to(submit_grade)).route(
        "/get_current_avg_score/{assignment_id}",
        web::get().to(current_average),
    );
}
