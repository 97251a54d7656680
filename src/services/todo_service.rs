//! TODO list service

use std::sync::Arc;

use tracing::{info, trace};

use crate::errors::{LinkdoError, Result};
use crate::storage::{NewTodo, Todo, TodoStore};

const NOT_FOUND_MESSAGE: &str = "Todo item not found";

pub struct TodoService {
    store: Arc<TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    /// 创建记录，返回新 id
    pub async fn create(&self, item: NewTodo) -> Result<i64> {
        let id = self.store.insert(&item).await?;
        info!("Todo {} created: {}", id, item.title);
        Ok(id)
    }

    /// All records ordered by id.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let items = self.store.list().await?;
        trace!("Listing {} todos", items.len());
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> Result<Todo> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| LinkdoError::not_found(NOT_FOUND_MESSAGE))
    }

    /// 整体替换三个可变字段；0 行受影响即不存在
    pub async fn update(&self, id: i64, item: NewTodo) -> Result<()> {
        if self.store.update(id, &item).await? == 0 {
            return Err(LinkdoError::not_found(NOT_FOUND_MESSAGE));
        }
        info!("Todo {} updated", id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if self.store.delete(id).await? == 0 {
            return Err(LinkdoError::not_found(NOT_FOUND_MESSAGE));
        }
        info!("Todo {} deleted", id);
        Ok(())
    }
}
