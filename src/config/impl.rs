use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};

use super::AppConfig;

/// OSS 直传允许的 MIME 类型：pdf、jpeg、png、doc、docx、mp4
const DEFAULT_ALLOWED_CONTENT_TYPES: [&str; 6] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "video/mp4",
];

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级（低到高）：内置默认值、`config` 文件、`config.{APP_ENV}` 文件、
    /// `ASSIGNMENT_HUB_` 前缀环境变量、常用的扁平环境变量。
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::default_builder()?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ASSIGNMENT_HUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let database_url = std::env::var("DATABASE")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok();

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", database_url)?
            .set_override_option("oss.access_key_id", std::env::var("OSS_ACCESS_KEY_ID").ok())?
            .set_override_option(
                "oss.access_key_secret",
                std::env::var("OSS_ACCESS_KEY_SECRET").ok(),
            )?
            .set_override_option("oss.bucket", std::env::var("OSS_BUCKET_NAME").ok())?
            .set_override_option("oss.endpoint", std::env::var("OSS_ENDPOINT").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;

        Ok(app_config)
    }

    /// 内置默认值，密钥类配置为空字符串，需要由外部提供
    fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.system_name", "Assignment Hub")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("database.url", "")?
            .set_default("database.pool_size", 8)?
            .set_default("database.timeout", 10)?
            .set_default("cors.max_age", 3600)?
            .set_default("oss.access_key_id", "")?
            .set_default("oss.access_key_secret", "")?
            .set_default("oss.bucket", "")?
            .set_default("oss.endpoint", "")?
            .set_default("oss.policy_expire_secs", 1200)?
            .set_default("oss.max_content_length", 10_485_760_000_u64)?
            .set_default(
                "oss.allowed_content_types",
                DEFAULT_ALLOWED_CONTENT_TYPES.to_vec(),
            )
    }

    /// 校验必填配置，缺失时返回指明环境变量的错误
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("OSS_ACCESS_KEY_ID", &self.oss.access_key_id),
            ("OSS_ACCESS_KEY_SECRET", &self.oss.access_key_secret),
            ("OSS_BUCKET_NAME", &self.oss.bucket),
            ("OSS_ENDPOINT", &self.oss.endpoint),
            ("DATABASE", &self.database.url),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "Environment variable {name} is not set."
                )));
            }
        }

        if self.oss.policy_expire_secs <= 0 {
            return Err(ConfigError::Message(
                "oss.policy_expire_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(overrides: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfig::default_builder()?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        builder.build()?.try_deserialize()
    }

    fn complete_overrides() -> Vec<(&'static str, &'static str)> {
        vec![
            ("oss.access_key_id", "LTAI-test"),
            ("oss.access_key_secret", "secret"),
            ("oss.bucket", "coursework"),
            ("oss.endpoint", "oss-cn-hangzhou.aliyuncs.com"),
            ("database.url", "assignments.db"),
        ]
    }

    #[test]
    fn test_defaults_fill_policy_settings() {
        let config = config_with(&complete_overrides()).unwrap();
        assert_eq!(config.oss.policy_expire_secs, 1200);
        assert_eq!(config.oss.max_content_length, 10_485_760_000);
        assert_eq!(config.oss.allowed_content_types.len(), 6);
        assert_eq!(config.oss.allowed_content_types[0], "application/pdf");
        assert_eq!(config.oss.allowed_content_types[5], "video/mp4");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_is_reported() {
        let overrides: Vec<_> = complete_overrides()
            .into_iter()
            .filter(|(key, _)| *key != "oss.access_key_secret")
            .collect();
        let config = config_with(&overrides).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("OSS_ACCESS_KEY_SECRET"));
    }

    #[test]
    fn test_missing_database_is_reported() {
        let overrides: Vec<_> = complete_overrides()
            .into_iter()
            .filter(|(key, _)| *key != "database.url")
            .collect();
        let config = config_with(&overrides).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("DATABASE"));
    }

    #[test]
    fn test_secret_is_not_serialized() {
        let config = config_with(&complete_overrides()).unwrap();
        let json = serde_json::to_string(&config.oss).unwrap();
        assert!(json.contains("LTAI-test"));
        assert!(!json.contains("access_key_secret"));
    }

    #[test]
    fn test_bind_address() {
        let config = config_with(&complete_overrides()).unwrap();
        assert_eq!(config.server_bind_address(), "127.0.0.1:5000");
        assert!(config.is_development());
        assert_eq!(config.app.system_name, "Assignment Hub");
    }
}
