//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 连接池在启动时创建一次，每个请求在查询期间从池中借用连接。

mod assignments;
mod classes;
mod grades;

use crate::config::DatabaseConfig;
use crate::errors::{AssignmentHubError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::from_connection(db).await
    }

    /// 使用已有连接创建存储实例并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None).await.map_err(|e| {
            AssignmentHubError::database_connection(format!("数据库迁移失败: {e}"))
        })?;

        info!("SeaORM 存储初始化完成");

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_in_memory(url);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AssignmentHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // 内存库每个连接都是独立的数据库，只能用单连接并保持常驻
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| {
                AssignmentHubError::database_connection(format!("SQLite 连接失败: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| AssignmentHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AssignmentHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentListItem, AssignmentSummary},
        requests::NewAssignment,
    },
    classes::entities::{Class, Group},
    grades::entities::{Grade, ScoreCard},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 班级模块
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn list_groups_by_class(&self, class_id: i64) -> Result<Vec<Group>> {
        self.list_groups_by_class_impl(class_id).await
    }

    // 作品模块
    async fn list_assignment_summaries_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AssignmentSummary>> {
        self.list_assignment_summaries_by_class_impl(class_id).await
    }

    async fn list_assignments(&self) -> Result<Vec<AssignmentListItem>> {
        self.list_assignments_impl().await
    }

    async fn count_assignments_by_group(&self, group_id: i64) -> Result<u64> {
        self.count_assignments_by_group_impl(group_id).await
    }

    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    // 评分模块
    async fn create_grade(&self, assignment_id: i64, scores: ScoreCard) -> Result<Grade> {
        self.create_grade_impl(assignment_id, scores).await
    }

    async fn list_grades_by_assignment(&self, assignment_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_assignment_impl(assignment_id).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("assignments.db").unwrap(),
            "sqlite://assignments.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/hub").unwrap(),
            "postgres://localhost/hub"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        let err = SeaOrmStorage::build_database_url("ftp://nowhere").unwrap_err();
        assert_eq!(err.code(), "E007");
    }

    #[tokio::test]
    async fn test_in_memory_url_uses_one_migrated_connection() {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 8,
            timeout: 10,
        };
        let storage = SeaOrmStorage::new_async(&config).await.unwrap();

        let results = futures_util::future::join_all(
            (0..8).map(|group_id| storage.count_assignments_by_group_impl(group_id)),
        )
        .await;
        assert!(results.iter().all(|count| matches!(count, Ok(0))));
        assert!(storage.list_classes_impl().await.unwrap().is_empty());
    }
}
