use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::{AssignmentHubError, Result};
use crate::models::ApiResponse;
use crate::models::grades::{entities::Grade, requests::GradeForm};
use crate::storage::Storage;
use crate::utils::{RawScores, error_response, validate_scores};

/// 校验并写入一条评分
pub async fn record_grade(storage: &dyn Storage, form: &GradeForm) -> Result<Grade> {
    let assignment_id = form
        .assignment_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AssignmentHubError::invalid_input("assignment_id is required"))?
        .parse::<i64>()
        .map_err(|_| AssignmentHubError::invalid_input("assignment_id must be an integer"))?;

    let scores = validate_scores(RawScores {
        language: form.language_score.as_deref(),
        technical: form.technical_score.as_deref(),
        creativity: form.creativity_score.as_deref(),
        teamwork: form.teamwork_score.as_deref(),
    })?;

    storage.create_grade(assignment_id, scores).await
}

pub async fn submit_grade(
    service: &GradeService,
    request: &HttpRequest,
    form: GradeForm,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match record_grade(storage.as_ref(), &form).await {
        Ok(grade) => {
            info!(
                "Grade {} recorded for assignment {} (total {})",
                grade.id,
                grade.assignment_id,
                grade.scores.total()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::message("Grade submitted successfully", true)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::requests::NewAssignment;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    fn grade_form(assignment_id: &str, scores: [&str; 4]) -> GradeForm {
        GradeForm {
            assignment_id: Some(assignment_id.to_string()),
            language_score: Some(scores[0].to_string()),
            technical_score: Some(scores[1].to_string()),
            creativity_score: Some(scores[2].to_string()),
            teamwork_score: Some(scores[3].to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_grade_is_recorded() {
        let storage = memory_storage().await;
        let assignment = storage
            .create_assignment(NewAssignment {
                group_id: 1,
                video_title: "Demo".into(),
                video_file: String::new(),
                project_report: String::new(),
                script_file: String::new(),
                screenshots: String::new(),
                recording_file: String::new(),
            })
            .await
            .unwrap();

        let form = grade_form(&assignment.id.to_string(), ["25", "28.5", "18", "20"]);
        let grade = record_grade(&storage, &form).await.unwrap();
        assert_eq!(grade.assignment_id, assignment.id);
        assert_eq!(grade.scores.total(), 91.5);
    }

    #[tokio::test]
    async fn test_out_of_range_grade_is_not_stored() {
        let storage = memory_storage().await;
        let form = grade_form("1", ["25", "28", "21", "20"]);

        let err = record_grade(&storage, &form).await.unwrap_err();
        match err {
            AssignmentHubError::OutOfRange(msg) => assert!(msg.contains("creativity_score")),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert!(
            storage
                .list_grades_by_assignment(1)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_missing_assignment_id_is_invalid_input() {
        let storage = memory_storage().await;
        let mut form = grade_form("1", ["1", "1", "1", "1"]);
        form.assignment_id = None;

        let err = record_grade(&storage, &form).await.unwrap_err();
        assert!(matches!(err, AssignmentHubError::InvalidInput(_)));
    }
}
