use std::str::FromStr;
use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::errors::{LinkdoError, Result};

/// 判断是否为内存数据库
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// 规范化数据库地址
///
/// Accepts a bare file path (`todo.db`), a `sqlite://` URL or
/// `sqlite::memory:`. Bare paths become `sqlite://<path>?mode=rwc`.
pub fn normalize_sqlite_url(database_url: &str) -> Result<String> {
    let url = database_url.trim();

    if url.is_empty() {
        return Err(LinkdoError::database_config("数据库地址未设置"));
    }
    if url == ":memory:" {
        return Ok("sqlite::memory:".to_string());
    }
    if url.starts_with("sqlite:") {
        return Ok(url.to_string());
    }
    if url.contains("://") {
        return Err(LinkdoError::database_config(format!(
            "不支持的数据库地址: {}. 仅支持 SQLite 文件路径或 sqlite:// URL",
            url
        )));
    }

    Ok(format!("sqlite://{}?mode=rwc", url))
}

/// 连接 SQLite 数据库（带自动创建）
pub async fn connect_sqlite(
    database_url: &str,
    options: &DatabaseConfig,
) -> Result<DatabaseConnection> {
    let url = normalize_sqlite_url(database_url)?;
    let in_memory = is_memory_url(&url);

    let mut opt = SqliteConnectOptions::from_str(&url)
        .map_err(|e| LinkdoError::database_config(format!("SQLite URL 解析失败: {}", e)))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(options.busy_timeout_secs));
    if !in_memory {
        opt = opt
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    // 内存数据库每个连接互相独立，只能用单连接且不能回收
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(options.pool_size.max(1))
    };

    let pool = pool_options.connect_with(opt).await.map_err(|e| {
        LinkdoError::database_connection(format!("无法连接到 SQLite 数据库 {}: {}", url, e))
    })?;

    debug!("SQLite pool ready: {}", url);
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 初始化表结构（幂等）
pub async fn init_schema<M: MigratorTrait>(db: &DatabaseConnection) -> Result<()> {
    M::up(db, None)
        .await
        .map_err(|e| LinkdoError::database_operation(format!("初始化表结构失败: {}", e)))?;

    info!("Database schema ready");
    Ok(())
}

/// 打开存储：连接并确保表存在
pub async fn open_store<M: MigratorTrait>(
    database_url: &str,
    options: &DatabaseConfig,
) -> Result<DatabaseConnection> {
    let db = connect_sqlite(database_url, options).await?;
    init_schema::<M>(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_path() {
        assert_eq!(
            normalize_sqlite_url("todo.db").unwrap(),
            "sqlite://todo.db?mode=rwc"
        );
        assert_eq!(
            normalize_sqlite_url("/var/lib/linkdo/shorturl.db").unwrap(),
            "sqlite:///var/lib/linkdo/shorturl.db?mode=rwc"
        );
    }

    #[test]
    fn test_normalize_keeps_sqlite_urls() {
        assert_eq!(
            normalize_sqlite_url("sqlite://data.db?mode=rwc").unwrap(),
            "sqlite://data.db?mode=rwc"
        );
        assert_eq!(
            normalize_sqlite_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn test_normalize_rejects_other_backends() {
        assert!(matches!(
            normalize_sqlite_url("postgres://localhost/db"),
            Err(LinkdoError::DatabaseConfig(_))
        ));
        assert!(matches!(
            normalize_sqlite_url("  "),
            Err(LinkdoError::DatabaseConfig(_))
        ));
    }

    #[test]
    fn test_is_memory_url() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file?mode=memory"));
        assert!(!is_memory_url("sqlite://todo.db?mode=rwc"));
    }
}
