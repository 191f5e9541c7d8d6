use crate::errors::{AssignmentHubError, Result};
use crate::models::grades::entities::ScoreCard;

/// 评分标准上限：语言 30、技术 30、创意 20、团队协作 20
pub const LANGUAGE_MAX: f64 = 30.0;
pub const TECHNICAL_MAX: f64 = 30.0;
pub const CREATIVITY_MAX: f64 = 20.0;
pub const TEAMWORK_MAX: f64 = 20.0;

/// 未经解析的四项分数
#[derive(Debug, Clone, Copy, Default)]
pub struct RawScores<'a> {
    pub language: Option<&'a str>,
    pub technical: Option<&'a str>,
    pub creativity: Option<&'a str>,
    pub teamwork: Option<&'a str>,
}

fn parse_score(field: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AssignmentHubError::invalid_input(format!("{field} is required")))?;

    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AssignmentHubError::invalid_input(format!("{field} must be a number")))
}

fn check_bound(field: &str, value: f64, max: f64) -> Result<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(AssignmentHubError::out_of_range(format!(
            "{field} must be between 0 and {max}"
        )))
    }
}

/// 校验评分
///
/// 先全部解析，再按 语言 → 技术 → 创意 → 团队协作 的顺序检查上下限，
/// 返回第一个越界的字段。
pub fn validate_scores(raw: RawScores<'_>) -> Result<ScoreCard> {
    let language = parse_score("language_score", raw.language)?;
    let technical = parse_score("technical_score", raw.technical)?;
    let creativity = parse_score("creativity_score", raw.creativity)?;
    let teamwork = parse_score("teamwork_score", raw.teamwork)?;

    check_bound("language_score", language, LANGUAGE_MAX)?;
    check_bound("technical_score", technical, TECHNICAL_MAX)?;
    check_bound("creativity_score", creativity, CREATIVITY_MAX)?;
    check_bound("teamwork_score", teamwork, TEAMWORK_MAX)?;

    Ok(ScoreCard {
        language,
        technical,
        creativity,
        teamwork,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(l: &'a str, t: &'a str, c: &'a str, w: &'a str) -> RawScores<'a> {
        RawScores {
            language: Some(l),
            technical: Some(t),
            creativity: Some(c),
            teamwork: Some(w),
        }
    }

    fn out_of_range_field(result: Result<ScoreCard>) -> String {
        match result {
            Err(AssignmentHubError::OutOfRange(msg)) => msg,
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_scores_within_bounds() {
        let card = validate_scores(raw("30", "0", "12.5", "20")).unwrap();
        assert_eq!(card.language, 30.0);
        assert_eq!(card.technical, 0.0);
        assert_eq!(card.creativity, 12.5);
        assert_eq!(card.teamwork, 20.0);

        for l in [0, 7, 15, 29, 30] {
            for c in [0, 10, 20] {
                let (l, c) = (l.to_string(), c.to_string());
                assert!(validate_scores(raw(&l, "30", &c, "0")).is_ok());
            }
        }
    }

    #[test]
    fn test_each_bound_names_its_field() {
        let cases = [
            (raw("30.5", "0", "0", "0"), "language_score"),
            (raw("0", "31", "0", "0"), "technical_score"),
            (raw("0", "0", "21", "0"), "creativity_score"),
            (raw("0", "0", "0", "20.01"), "teamwork_score"),
            (raw("-1", "0", "0", "0"), "language_score"),
        ];

        for (scores, field) in cases {
            let msg = out_of_range_field(validate_scores(scores));
            assert!(msg.contains(field), "{msg} should name {field}");
        }
    }

    #[test]
    fn test_first_offending_field_wins() {
        let msg = out_of_range_field(validate_scores(raw("10", "99", "99", "99")));
        assert!(msg.contains("technical_score"));
    }

    #[test]
    fn test_missing_or_non_numeric_is_invalid_input() {
        let missing = RawScores {
            language: Some("10"),
            technical: None,
            creativity: Some("10"),
            teamwork: Some("10"),
        };
        assert!(matches!(
            validate_scores(missing),
            Err(AssignmentHubError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_scores(raw("ten", "10", "10", "10")),
            Err(AssignmentHubError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_scores(raw("10", "10", "NaN", "10")),
            Err(AssignmentHubError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_scores(raw("10", "", "10", "10")),
            Err(AssignmentHubError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_errors_take_precedence_over_bounds() {
        // 语言越界，但团队协作无法解析
        assert!(matches!(
            validate_scores(raw("99", "10", "10", "x")),
            Err(AssignmentHubError::InvalidInput(_))
        ));
    }
}
