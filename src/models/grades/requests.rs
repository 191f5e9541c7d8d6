use serde::Deserialize;

/// 评分表单，四项分数保持原始字符串，由评分校验器解析
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeForm {
    pub assignment_id: Option<String>,
    #[serde(rename = "languageScore")]
    pub language_score: Option<String>,
    #[serde(rename = "technicalScore")]
    pub technical_score: Option<String>,
    #[serde(rename = "creativityScore")]
    pub creativity_score: Option<String>,
    #[serde(rename = "teamworkScore")]
    pub teamwork_score: Option<String>,
}
