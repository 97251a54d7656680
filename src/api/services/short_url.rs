//! URL 短链服务的 HTTP 处理函数

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use crate::errors::LinkdoError;
use crate::services::ShortUrlService;

use super::helpers::{json_config, path_config};
use super::types::{ResolveResponse, ServiceInfo, ShortenRequest, ShortenResponse};

pub fn service_info() -> ServiceInfo {
    ServiceInfo::new(
        "Welcome to the URL shortening API!",
        &[
            ("POST /shorten", "Create a short link for a full URL."),
            ("GET /{short_id}", "Resolve a short id to its full URL."),
            (
                "GET /stats/{short_id}",
                "Get information about the full URL behind a short id.",
            ),
        ],
    )
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(service_info())
}

pub async fn shorten(
    payload: web::Json<ShortenRequest>,
    service: web::Data<Arc<ShortUrlService>>,
) -> Result<HttpResponse, LinkdoError> {
    let url = payload.validated_url()?;
    let short_url = service.shorten(url).await?;
    Ok(HttpResponse::Ok().json(ShortenResponse { short_url }))
}

pub async fn resolve(
    path: web::Path<String>,
    service: web::Data<Arc<ShortUrlService>>,
) -> Result<HttpResponse, LinkdoError> {
    let short_id = path.into_inner();
    trace!("Resolve request: {}", short_id);

    let url = service.resolve(&short_id).await?;
    Ok(HttpResponse::Ok().json(ResolveResponse { url }))
}

pub async fn stats(
    path: web::Path<String>,
    service: web::Data<Arc<ShortUrlService>>,
) -> Result<HttpResponse, LinkdoError> {
    let short_id = path.into_inner();
    trace!("Stats request: {}", short_id);

    let stats = service.stats(&short_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// 短链服务路由
///
/// - GET  /                  服务说明
/// - POST /shorten           创建短链
/// - GET  /stats/{short_id}  查询短链信息
/// - GET  /{short_id}        解析短链（必须最后注册）
pub fn short_url_routes() -> actix_web::Scope {
    web::scope("")
        .app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(root))
        .route("/shorten", web::post().to(shorten))
        .route("/stats/{short_id}", web::get().to(stats))
        .route("/{short_id}", web::get().to(resolve))
}
