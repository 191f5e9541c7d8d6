/// 附件列表落库时使用的分隔符
pub const ARTIFACT_SEPARATOR: &str = ", ";

/// 上传表单（urlencoded 或 multipart）
///
/// `video`、`report`、`script`、`screenshot`、`recording` 可重复出现，
/// 因此由键值对列表折叠而成，而不是直接反序列化。
/// `group_id` 与 `video_title` 重复时取第一次出现的值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadAssignmentForm {
    pub group_id: Option<String>,
    pub video_title: Option<String>,
    pub video: Vec<String>,
    pub report: Vec<String>,
    pub script: Vec<String>,
    pub screenshot: Vec<String>,
    pub recording: Vec<String>,
}

impl UploadAssignmentForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "group_id" => {
                    form.group_id.get_or_insert(value);
                }
                "video_title" => {
                    form.video_title.get_or_insert(value);
                }
                "video" => form.video.push(value),
                "report" => form.report.push(value),
                "script" => form.script.push(value),
                "screenshot" => form.screenshot.push(value),
                "recording" => form.recording.push(value),
                _ => {}
            }
        }
        form
    }
}

/// 待写入的作品记录，附件已序列化
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub group_id: i64,
    pub video_title: String,
    pub video_file: String,
    pub project_report: String,
    pub script_file: String,
    pub screenshots: String,
    pub recording_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_repeated_fields_are_collected_in_order() {
        let form = UploadAssignmentForm::from_pairs(vec![
            pair("group_id", "7"),
            pair("video_title", "Final cut"),
            pair("screenshot", "oss://a.png"),
            pair("video", "oss://v.mp4"),
            pair("screenshot", "oss://b.png"),
            pair("unknown", "ignored"),
        ]);

        assert_eq!(form.group_id.as_deref(), Some("7"));
        assert_eq!(form.video_title.as_deref(), Some("Final cut"));
        assert_eq!(form.video, vec!["oss://v.mp4"]);
        assert_eq!(form.screenshot, vec!["oss://a.png", "oss://b.png"]);
        assert!(form.report.is_empty());
        assert!(form.recording.is_empty());
    }

    #[test]
    fn test_first_scalar_value_wins() {
        let form = UploadAssignmentForm::from_pairs(vec![
            pair("group_id", "3"),
            pair("video_title", "Original"),
            pair("group_id", "4"),
            pair("video_title", "Replacement"),
        ]);

        assert_eq!(form.group_id.as_deref(), Some("3"));
        assert_eq!(form.video_title.as_deref(), Some("Original"));
    }
}
