pub mod average;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{AssignmentHubError, Result};
use crate::models::grades::requests::GradeForm;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| AssignmentHubError::storage_error("Storage not found in app data"))
    }

    /// 提交评分
    pub async fn submit_grade(
        &self,
        request: &HttpRequest,
        form: GradeForm,
    ) -> ActixResult<HttpResponse> {
        submit::submit_grade(self, request, form).await
    }

    /// 获取作品当前平均分
    pub async fn current_average(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        average::current_average(self, request, assignment_id).await
    }
}
