use serde::{Deserialize, Serialize};

/// 通过校验的一组评分（四项评分标准）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub language: f64,
    pub technical: f64,
    pub creativity: f64,
    pub teamwork: f64,
}

impl ScoreCard {
    /// 单个评分者给出的总分
    pub fn total(&self) -> f64 {
        self.language + self.technical + self.creativity + self.teamwork
    }
}

/// 一名评分者对一份作品的评分记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub assignment_id: i64,
    pub scores: ScoreCard,
}
