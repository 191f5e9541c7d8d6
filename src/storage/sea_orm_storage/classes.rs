//! 班级与小组存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::groups::{Column as GroupColumn, Entity as Groups};
use crate::errors::{AssignmentHubError, Result};
use crate::models::classes::entities::{Class, Group};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出所有班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(ClassColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 列出班级下的小组，班级不存在时返回空列表
    pub async fn list_groups_by_class_impl(&self, class_id: i64) -> Result<Vec<Group>> {
        let groups = Groups::find()
            .filter(GroupColumn::ClassId.eq(class_id))
            .order_by_asc(GroupColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignmentHubError::storage_error(format!("查询小组列表失败: {e}")))?;

        Ok(groups.into_iter().map(|m| m.into_group()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_group};

    #[tokio::test]
    async fn test_list_classes_and_groups() {
        let storage = memory_storage().await;
        let class_a = seed_class(&storage, "Class A").await;
        let class_b = seed_class(&storage, "Class B").await;
        seed_group(&storage, class_a, "Group 1").await;
        seed_group(&storage, class_a, "Group 2").await;
        seed_group(&storage, class_b, "Group 3").await;

        let classes = storage.list_classes_impl().await.unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name, "Class A");

        let groups = storage.list_groups_by_class_impl(class_a).await.unwrap();
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Group 1", "Group 2"]);
    }

    #[tokio::test]
    async fn test_groups_of_unknown_class_is_empty() {
        let storage = memory_storage().await;
        let groups = storage.list_groups_by_class_impl(404).await.unwrap();
        assert!(groups.is_empty());
    }
}
