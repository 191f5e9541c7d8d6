use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::errors::{AssignmentHubError, Result};
use crate::models::grades::entities::ScoreCard;
use crate::storage::Storage;
use crate::utils::error_response;

/// 各评分者总分的平均值（不是各项分别求平均）
pub fn average_total<'a, I>(scores: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a ScoreCard>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), card| (sum + card.total(), count + 1));

    if count == 0 {
        return Err(AssignmentHubError::no_grades(
            "No grades found for this assignment",
        ));
    }

    Ok(sum / count as f64)
}

pub async fn assignment_average(storage: &dyn Storage, assignment_id: i64) -> Result<f64> {
    let grades = storage.list_grades_by_assignment(assignment_id).await?;
    average_total(grades.iter().map(|grade| &grade.scores))
}

/// 以纯文本返回平均分
pub async fn current_average(
    service: &GradeService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = match service.get_storage(request) {
        Ok(storage) => storage,
        Err(e) => return Ok(error_response(&e)),
    };

    match assignment_average(storage.as_ref(), assignment_id).await {
        Ok(average) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(average.to_string())),
        Err(e) => Ok(error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(language: f64, technical: f64, creativity: f64, teamwork: f64) -> ScoreCard {
        ScoreCard {
            language,
            technical,
            creativity,
            teamwork,
        }
    }

    #[test]
    fn test_mean_of_grader_totals() {
        let grades = [card(10.0, 10.0, 5.0, 5.0), card(20.0, 20.0, 10.0, 10.0)];
        assert_eq!(average_total(&grades).unwrap(), 45.0);
    }

    #[test]
    fn test_single_grade() {
        let grades = [card(30.0, 30.0, 20.0, 20.0)];
        assert_eq!(average_total(&grades).unwrap(), 100.0);
    }

    #[test]
    fn test_no_grades() {
        let err = average_total(std::iter::empty::<&ScoreCard>()).unwrap_err();
        assert!(matches!(err, AssignmentHubError::NoGrades(_)));
    }
}
