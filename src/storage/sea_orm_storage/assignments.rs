//! 作品存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Relation};
use crate::entity::classes::Column as ClassColumn;
use crate::entity::groups::{Column as GroupColumn, Relation as GroupRelation};
use crate::errors::{AssignmentHubError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentListItem, AssignmentSummary},
    requests::NewAssignment,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

/// 联表查询结果
#[derive(Debug, FromQueryResult)]
struct AssignmentSummaryRow {
    id: i64,
    group_id: i64,
    video_title: String,
    video_file: String,
    group_name: String,
    class_name: String,
}

impl From<AssignmentSummaryRow> for AssignmentSummary {
    fn from(row: AssignmentSummaryRow) -> Self {
        AssignmentSummary {
            id: row.id,
            group_id: row.group_id,
            video_title: row.video_title,
            video_file: row.video_file,
            group_name: row.group_name,
            class_name: row.class_name,
        }
    }
}

impl SeaOrmStorage {
    /// 写入作品
    ///
    /// 唯一约束由数据库原子地检查，并发提交同一小组时只有一条成功。
    pub async fn create_assignment_impl(&self, req: NewAssignment) -> Result<Assignment> {
        let group_id = req.group_id;

        let model = ActiveModel {
            group_id: Set(req.group_id),
            video_title: Set(req.video_title),
            video_file: Set(req.video_file),
            project_report: Set(req.project_report),
            script_file: Set(req.script_file),
            screenshots: Set(req.screenshots),
            recording_file: Set(req.recording_file),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(group_id, e))?;

        Ok(result.into_assignment())
    }

    /// 统计小组的作品数量
    pub async fn count_assignments_by_group_impl(&self, group_id: i64) -> Result<u64> {
        Assignments::find()
            .filter(Column::GroupId.eq(group_id))
            .count(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询作品数量失败: {e}")))
    }

    /// 列出班级下的作品概要
    pub async fn list_assignment_summaries_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<AssignmentSummary>> {
        let rows = Assignments::find()
            .select_only()
            .column(Column::Id)
            .column(Column::GroupId)
            .column(Column::VideoTitle)
            .column(Column::VideoFile)
            .column_as(GroupColumn::Name, "group_name")
            .column_as(ClassColumn::Name, "class_name")
            .join(JoinType::InnerJoin, Relation::Group.def())
            .join(JoinType::InnerJoin, GroupRelation::Class.def())
            .filter(GroupColumn::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .into_model::<AssignmentSummaryRow>()
            .all(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询作品列表失败: {e}")))?;

        Ok(rows.into_iter().map(AssignmentSummary::from).collect())
    }

    /// 列出所有作品
    pub async fn list_assignments_impl(&self) -> Result<Vec<AssignmentListItem>> {
        let rows = Assignments::find()
            .select_only()
            .column(Column::Id)
            .column(Column::GroupId)
            .column(Column::VideoTitle)
            .order_by_asc(Column::Id)
            .into_tuple::<(i64, i64, String)>()
            .all(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询作品列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(id, group_id, video_title)| AssignmentListItem {
                id,
                group_id,
                video_title,
            })
            .collect())
    }
}

fn map_insert_error(group_id: i64, err: DbErr) -> AssignmentHubError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AssignmentHubError::duplicate_submission(
            format!("Group {group_id} has already uploaded an assignment"),
        ),
        _ => AssignmentHubError::storage_error(format!("创建作品失败: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_group};
    use super::*;

    fn new_assignment(group_id: i64, title: &str) -> NewAssignment {
        NewAssignment {
            group_id,
            video_title: title.to_string(),
            video_file: "oss://videos/final.mp4".to_string(),
            project_report: "oss://reports/report.pdf".to_string(),
            script_file: String::new(),
            screenshots: "oss://shots/1.png, oss://shots/2.png".to_string(),
            recording_file: String::new(),
        }
    }

    #[tokio::test]
    async fn test_second_insert_for_group_is_rejected() {
        let storage = memory_storage().await;

        let first = storage
            .create_assignment_impl(new_assignment(3, "First"))
            .await
            .unwrap();
        assert_eq!(first.group_id, 3);

        let err = storage
            .create_assignment_impl(new_assignment(3, "Second"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssignmentHubError::DuplicateSubmission(_)));

        // 原记录保持不变
        assert_eq!(storage.count_assignments_by_group_impl(3).await.unwrap(), 1);
        let all = storage.list_assignments_impl().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].video_title, "First");
    }

    #[tokio::test]
    async fn test_summaries_join_group_and_class() {
        let storage = memory_storage().await;
        let class_a = seed_class(&storage, "Class A").await;
        let class_b = seed_class(&storage, "Class B").await;
        let group_a = seed_group(&storage, class_a, "Otters").await;
        let group_b = seed_group(&storage, class_b, "Badgers").await;

        storage
            .create_assignment_impl(new_assignment(group_a, "River"))
            .await
            .unwrap();
        storage
            .create_assignment_impl(new_assignment(group_b, "Forest"))
            .await
            .unwrap();

        let summaries = storage
            .list_assignment_summaries_by_class_impl(class_a)
            .await
            .unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].group_id, group_a);
        assert_eq!(summaries[0].video_title, "River");
        assert_eq!(summaries[0].video_file, "oss://videos/final.mp4");
        assert_eq!(summaries[0].group_name, "Otters");
        assert_eq!(summaries[0].class_name, "Class A");
    }

    #[tokio::test]
    async fn test_summaries_for_class_without_groups_is_empty() {
        let storage = memory_storage().await;
        let class_id = seed_class(&storage, "Empty").await;

        let summaries = storage
            .list_assignment_summaries_by_class_impl(class_id)
            .await
            .unwrap();
        assert!(summaries.is_empty());
    }
}
