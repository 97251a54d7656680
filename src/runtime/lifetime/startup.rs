use std::sync::Arc;

use actix_web::web;
use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::services::{short_url_routes, todo_routes};
use crate::config::StaticConfig;
use crate::runtime::ServiceKind;
use crate::services::{ShortUrlService, TodoService};
use crate::storage::{ShortUrlStore, TodoStore};

/// 监听参数
#[derive(Clone, Debug)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ListenConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 已组装好的服务：存储句柄 + 业务服务
///
/// Cloned into every actix worker, so it only holds `Arc`s.
#[derive(Clone)]
pub enum ServiceRoutes {
    ShortUrl {
        store: Arc<ShortUrlStore>,
        service: Arc<ShortUrlService>,
    },
    Todo {
        store: Arc<TodoStore>,
        service: Arc<TodoService>,
    },
}

impl ServiceRoutes {
    /// 注册服务数据和路由
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        match self {
            ServiceRoutes::ShortUrl { service, .. } => {
                cfg.app_data(web::Data::new(service.clone()))
                    .service(short_url_routes());
            }
            ServiceRoutes::Todo { service, .. } => {
                cfg.app_data(web::Data::new(service.clone()))
                    .service(todo_routes());
            }
        }
    }

    /// 关闭底层数据库连接池
    pub async fn close(&self) -> crate::errors::Result<()> {
        match self {
            ServiceRoutes::ShortUrl { store, .. } => store.close().await,
            ServiceRoutes::Todo { store, .. } => store.close().await,
        }
    }
}

pub struct ServerStartup {
    pub kind: ServiceKind,
    pub listen: ListenConfig,
    pub routes: ServiceRoutes,
}

/// 准备服务器启动的上下文
///
/// 打开（必要时创建）数据库文件，幂等地建表，然后组装服务。
pub async fn prepare_server_startup(
    kind: ServiceKind,
    config: &StaticConfig,
) -> Result<ServerStartup> {
    let start_time = std::time::Instant::now();
    debug!("Preparing {} service...", kind);

    let (listen, routes) = match kind {
        ServiceKind::ShortUrl => {
            let section = &config.short_url;
            let store = ShortUrlStore::open(&section.database_url, &config.database)
                .await
                .context("Failed to open short url store")?;
            let store = Arc::new(store);
            let service = Arc::new(ShortUrlService::new(
                store.clone(),
                section.base_url.clone(),
            ));
            info!("Short links will be issued under {}", service.base_url());

            (
                ListenConfig {
                    host: section.host.clone(),
                    port: section.port,
                    workers: section.workers,
                },
                ServiceRoutes::ShortUrl { store, service },
            )
        }
        ServiceKind::Todo => {
            let section = &config.todo;
            let store = TodoStore::open(&section.database_url, &config.database)
                .await
                .context("Failed to open todo store")?;
            let store = Arc::new(store);
            let service = Arc::new(TodoService::new(store.clone()));

            (
                ListenConfig {
                    host: section.host.clone(),
                    port: section.port,
                    workers: section.workers,
                },
                ServiceRoutes::Todo { store, service },
            )
        }
    };

    info!(
        "{} service prepared in {:.2?}",
        kind,
        start_time.elapsed()
    );

    Ok(ServerStartup {
        kind,
        listen,
        routes,
    })
}
