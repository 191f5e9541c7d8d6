//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_assignment_hub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum AssignmentHubError {
            $($variant(String),)*
        }

        impl AssignmentHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssignmentHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssignmentHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssignmentHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AssignmentHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssignmentHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_assignment_hub_errors! {
    MissingField("E001", "Missing Field"),
    InvalidInput("E002", "Invalid Input"),
    OutOfRange("E003", "Score Out Of Range"),
    DuplicateSubmission("E004", "Duplicate Submission"),
    NoGrades("E005", "No Grades"),
    StorageError("E006", "Storage Error"),
    DatabaseConfig("E007", "Database Configuration Error"),
    DatabaseConnection("E008", "Database Connection Error"),
    Serialization("E009", "Serialization Error"),
    Signature("E010", "Signature Error"),
}

impl AssignmentHubError {
    /// 是否为校验/业务规则错误（以 `success: false` 返回给调用方）
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            AssignmentHubError::MissingField(_)
                | AssignmentHubError::InvalidInput(_)
                | AssignmentHubError::OutOfRange(_)
                | AssignmentHubError::DuplicateSubmission(_)
                | AssignmentHubError::NoGrades(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AssignmentHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssignmentHubError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AssignmentHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        AssignmentHubError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for AssignmentHubError {
    fn from(err: serde_json::Error) -> Self {
        AssignmentHubError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssignmentHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AssignmentHubError::missing_field("test").code(), "E001");
        assert_eq!(AssignmentHubError::out_of_range("test").code(), "E003");
        assert_eq!(AssignmentHubError::no_grades("test").code(), "E005");
        assert_eq!(AssignmentHubError::signature("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AssignmentHubError::duplicate_submission("test").error_type(),
            "Duplicate Submission"
        );
        assert_eq!(
            AssignmentHubError::storage_error("test").error_type(),
            "Storage Error"
        );
    }

    #[test]
    fn test_business_classification() {
        assert!(AssignmentHubError::invalid_input("x").is_business());
        assert!(AssignmentHubError::duplicate_submission("x").is_business());
        assert!(AssignmentHubError::no_grades("x").is_business());
        assert!(!AssignmentHubError::storage_error("x").is_business());
        assert!(!AssignmentHubError::database_connection("x").is_business());
    }

    #[test]
    fn test_format_simple() {
        let err = AssignmentHubError::out_of_range("language_score must be between 0 and 30");
        let formatted = err.format_simple();
        assert!(formatted.contains("Score Out Of Range"));
        assert!(formatted.contains("language_score"));
    }
}
