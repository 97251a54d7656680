//! TODO 服务的 HTTP 处理函数

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};

use crate::errors::LinkdoError;
use crate::services::TodoService;

use super::helpers::{json_config, path_config};
use super::types::{CreatedResponse, MessageResponse, ServiceInfo, TodoPayload};

pub fn service_info() -> ServiceInfo {
    ServiceInfo::new(
        "Welcome to the TODO API!",
        &[
            ("POST /items", "Create a new todo item."),
            ("GET /items", "List all todo items."),
            ("GET /items/{item_id}", "Get a todo item by id."),
            ("PUT /items/{item_id}", "Replace a todo item by id."),
            ("DELETE /items/{item_id}", "Delete a todo item by id."),
        ],
    )
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(service_info())
}

pub async fn create_item(
    payload: web::Json<TodoPayload>,
    service: web::Data<Arc<TodoService>>,
) -> Result<HttpResponse, LinkdoError> {
    let item = payload.into_inner().into_new_todo()?;
    let id = service.create(item).await?;

    Ok(HttpResponse::Created().json(CreatedResponse {
        id,
        message: "Todo item created successfully".to_string(),
    }))
}

pub async fn list_items(
    service: web::Data<Arc<TodoService>>,
) -> Result<HttpResponse, LinkdoError> {
    let items = service.list().await?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn get_item(
    path: web::Path<i64>,
    service: web::Data<Arc<TodoService>>,
) -> Result<HttpResponse, LinkdoError> {
    let item = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

pub async fn update_item(
    path: web::Path<i64>,
    payload: web::Json<TodoPayload>,
    service: web::Data<Arc<TodoService>>,
) -> Result<HttpResponse, LinkdoError> {
    let item = payload.into_inner().into_new_todo()?;
    service.update(path.into_inner(), item).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo item updated successfully")))
}

pub async fn delete_item(
    path: web::Path<i64>,
    service: web::Data<Arc<TodoService>>,
) -> Result<HttpResponse, LinkdoError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo item deleted successfully")))
}

/// TODO 服务路由
///
/// - GET /                 服务说明
/// - POST/GET /items       创建 / 列表
/// - GET/PUT/DELETE /items/{item_id}
pub fn todo_routes() -> actix_web::Scope {
    web::scope("")
        .app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(root))
        .route("/items", web::post().to(create_item))
        .route("/items", web::get().to(list_items))
        .route("/items/{item_id}", web::get().to(get_item))
        .route("/items/{item_id}", web::put().to(update_item))
        .route("/items/{item_id}", web::delete().to(delete_item))
}
