use serde::{Deserialize, Serialize};

/// 小组提交的作品，附件字段为以 `, ` 分隔的对象存储地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub group_id: i64,
    pub video_title: String,
    pub video_file: String,
    pub project_report: String,
    pub script_file: String,
    pub screenshots: String,
    pub recording_file: String,
}

/// 按班级查询的作品概要（Assignment → Group → Class 联表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub id: i64,
    pub group_id: i64,
    pub video_title: String,
    pub video_file: String,
    pub group_name: String,
    pub class_name: String,
}

/// 全量作品列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentListItem {
    pub id: i64,
    pub group_id: i64,
    pub video_title: String,
}
