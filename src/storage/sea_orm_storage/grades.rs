//! 评分存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{AssignmentHubError, Result};
use crate::models::grades::entities::{Grade, ScoreCard};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};

impl SeaOrmStorage {
    /// 创建评分，不限制同一评分者重复评分
    pub async fn create_grade_impl(&self, assignment_id: i64, scores: ScoreCard) -> Result<Grade> {
        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            language_score: Set(scores.language),
            technical_score: Set(scores.technical),
            creativity_score: Set(scores.creativity),
            teamwork_score: Set(scores.teamwork),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AssignmentHubError::invalid_input(
                format!("Assignment {assignment_id} does not exist"),
            ),
            _ => AssignmentHubError::storage_error(format!("创建评分失败: {e}")),
        })?;

        Ok(result.into_grade())
    }

    /// 获取作品的所有评分
    pub async fn list_grades_by_assignment_impl(&self, assignment_id: i64) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询评分失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }
}
