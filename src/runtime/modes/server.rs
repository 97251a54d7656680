//! Server mode
//!
//! Starts the HTTP server for one service and keeps it running until the
//! server stops or Ctrl+C is received.

use std::time::Duration;

use actix_web::{App, HttpServer, middleware::DefaultHeaders};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::config::StaticConfig;
use crate::runtime::ServiceKind;
use crate::runtime::lifetime::{self, startup::ServerStartup};

/// Run the HTTP server for `kind`
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(kind: ServiceKind, config: &StaticConfig) -> Result<()> {
    let ServerStartup {
        kind,
        listen,
        routes,
    } = lifetime::startup::prepare_server_startup(kind, config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {:#}", e);
            e
        })?;

    let workers = listen.workers.clamp(1, 32);
    info!("Using {} workers for the {} service", workers, kind);

    let app_routes = routes.clone();
    let server = HttpServer::new(move || {
        let app_routes = app_routes.clone();
        App::new()
            .wrap(TimingMiddleware) // 最外层，记录请求延迟
            .wrap(RequestIdMiddleware) // 为每个请求生成 request_id
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .configure(move |cfg| app_routes.configure(cfg))
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(workers)
    .disable_signals();

    let bind_address = listen.bind_address();
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    warn!("Starting {} service at http://{}", kind, bind_address);

    let handle = server.handle();
    let mut server_task = actix_web::rt::spawn(server);

    // Wait for server or shutdown signal
    tokio::select! {
        res = &mut server_task => {
            res.context("HTTP server task aborted")??;
        }
        _ = lifetime::shutdown::wait_for_signal() => {
            handle.stop(true).await;
            // 等待在途请求完成
            let _ = server_task.await;
            info!("HTTP server stopped");
        }
    }

    lifetime::shutdown::release_resources(&routes).await;
    Ok(())
}
