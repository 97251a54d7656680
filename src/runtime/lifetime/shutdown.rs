use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use super::startup::ServiceRoutes;

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// 等待 Ctrl+C 信号
pub async fn wait_for_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}

/// 释放数据库连接池（带超时）
pub async fn release_resources(routes: &ServiceRoutes) {
    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), routes.close()).await {
        Ok(Ok(())) => {
            info!("Database connections closed");
        }
        Ok(Err(e)) => {
            error!("Failed to close database connections: {}", e);
        }
        Err(_) => {
            error!(
                "Closing database connections timed out after {} seconds",
                SHUTDOWN_TIMEOUT_SECS
            );
        }
    }
}
