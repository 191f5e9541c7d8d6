//! 作品提交实体
//!
//! 每个小组至多一条记录，由 `group_id` 上的唯一约束保证。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub group_id: i64,
    pub video_title: String,
    #[sea_orm(column_type = "Text")]
    pub video_file: String,
    #[sea_orm(column_type = "Text")]
    pub project_report: String,
    #[sea_orm(column_type = "Text")]
    pub script_file: String,
    #[sea_orm(column_type = "Text")]
    pub screenshots: String,
    #[sea_orm(column_type = "Text")]
    pub recording_file: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        crate::models::assignments::entities::Assignment {
            id: self.id,
            group_id: self.group_id,
            video_title: self.video_title,
            video_file: self.video_file,
            project_report: self.project_report,
            script_file: self.script_file,
            screenshots: self.screenshots,
            recording_file: self.recording_file,
        }
    }
}
