use crate::config::AppConfig;
use crate::errors::{AssignmentHubError, Result};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 启动时输出目录概况，便于确认连接的是哪个库
async fn log_catalog_overview(storage: &Arc<dyn Storage>) {
    match storage.list_classes().await {
        Ok(classes) if classes.is_empty() => {
            warn!("No classes found in database, catalog endpoints will return empty lists");
        }
        Ok(classes) => {
            info!("Catalog ready with {} class(es)", classes.len());
        }
        Err(e) => {
            warn!("Failed to read catalog overview: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括加密后端与存储初始化
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // 重复安装时返回 Err，此时已有可用的 provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database)
        .await
        .map_err(|e| {
            AssignmentHubError::database_connection(format!(
                "Failed to create storage backend: {e}"
            ))
        })?;
    warn!("Storage backend initialized and migrations completed");

    log_catalog_overview(&storage).await;

    Ok(StartupContext { storage })
}
