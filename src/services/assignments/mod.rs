pub mod list;
pub mod status;
pub mod upload;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{AssignmentHubError, Result};
use crate::models::assignments::requests::UploadAssignmentForm;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    /// 小组上传作品
    pub async fn upload_assignment(
        &self,
        request: &HttpRequest,
        form: UploadAssignmentForm,
    ) -> ActixResult<HttpResponse> {
        upload::upload_assignment(self, request, form).await
    }

    /// 按班级列出作品概要
    pub async fn list_class_assignments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_class_assignments(self, request, class_id).await
    }

    /// 列出所有作品
    pub async fn list_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request).await
    }

    /// 查询小组是否已提交
    pub async fn is_uploaded(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        status::is_uploaded(self, request, group_id).await
    }
}
