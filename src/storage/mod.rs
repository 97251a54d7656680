pub mod backend;
pub mod models;

pub use backend::{ShortUrlStore, TodoStore};
pub use models::{NewTodo, ShortUrl, Todo};
