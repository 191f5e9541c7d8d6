use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentListItem, AssignmentSummary},
        requests::NewAssignment,
    },
    classes::entities::{Class, Group},
    grades::entities::{Grade, ScoreCard},
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级与小组查询
    // 列出所有班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 列出班级下的小组
    async fn list_groups_by_class(&self, class_id: i64) -> Result<Vec<Group>>;

    /// 作品管理方法
    // 列出班级下的作品概要
    async fn list_assignment_summaries_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AssignmentSummary>>;
    // 列出所有作品
    async fn list_assignments(&self) -> Result<Vec<AssignmentListItem>>;
    // 统计小组的作品数量
    async fn count_assignments_by_group(&self, group_id: i64) -> Result<u64>;
    // 写入作品，小组已提交时返回 DuplicateSubmission
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment>;

    /// 评分管理方法
    // 写入评分
    async fn create_grade(&self, assignment_id: i64, scores: ScoreCard) -> Result<Grade>;
    // 获取作品的所有评分
    async fn list_grades_by_assignment(&self, assignment_id: i64) -> Result<Vec<Grade>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
