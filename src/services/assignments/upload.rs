use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::errors::{AssignmentHubError, Result};
use crate::models::ApiResponse;
use crate::models::assignments::{
    entities::Assignment,
    requests::{ARTIFACT_SEPARATOR, NewAssignment, UploadAssignmentForm},
};
use crate::storage::Storage;
use crate::utils::error_response;

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 登记小组提交
///
/// 必填字段缺失时直接返回，不访问数据库；重复提交由唯一约束拒绝，原记录不变。
pub async fn register_submission(
    storage: &dyn Storage,
    form: UploadAssignmentForm,
) -> Result<Assignment> {
    let (Some(group_id), Some(video_title)) = (required(form.group_id), required(form.video_title))
    else {
        return Err(AssignmentHubError::missing_field(
            "Group ID and video title are required",
        ));
    };

    let group_id = group_id
        .trim()
        .parse::<i64>()
        .map_err(|_| AssignmentHubError::invalid_input("Group ID must be an integer"))?;

    let assignment = NewAssignment {
        group_id,
        video_title,
        video_file: form.video.join(ARTIFACT_SEPARATOR),
        project_report: form.report.join(ARTIFACT_SEPARATOR),
        script_file: form.script.join(ARTIFACT_SEPARATOR),
        screenshots: form.screenshot.join(ARTIFACT_SEPARATOR),
        recording_file: form.recording.join(ARTIFACT_SEPARATOR),
    };

    storage.create_assignment(assignment).await
}

pub async fn upload_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    form: UploadAssignmentForm,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match register_submission(storage.as_ref(), form).await {
        Ok(assignment) => {
            info!(
                "Assignment {} uploaded by group {}",
                assignment.id, assignment.group_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::message("Upload successful", true)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
