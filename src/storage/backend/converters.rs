use crate::storage::{NewTodo, ShortUrl, Todo};
use migration::entities::{todo, url};

/// 将 Sea-ORM Model 转换为 ShortUrl
pub fn model_to_short_url(model: url::Model) -> ShortUrl {
    ShortUrl {
        id: model.id,
        short_id: model.short_id,
        full_url: model.full_url,
    }
}

/// 将 Sea-ORM Model 转换为 Todo
pub fn model_to_todo(model: todo::Model) -> Todo {
    Todo {
        id: model.id,
        title: model.title,
        description: model.description,
        completed: model.completed,
    }
}

/// 将 NewTodo 转换为 ActiveModel（id 由数据库分配）
pub fn new_todo_to_active_model(item: &NewTodo) -> todo::ActiveModel {
    use sea_orm::ActiveValue::*;

    todo::ActiveModel {
        id: NotSet,
        title: Set(item.title.clone()),
        description: Set(item.description.clone()),
        completed: Set(item.completed),
    }
}
