//! SeaORM storage backend
//!
//! One SQLite file per service. Every operation issues a single statement;
//! writes are wrapped in a transaction that commits on success and rolls
//! back when dropped on any error path.

mod connection;
mod converters;
mod short_url;
mod todo;

pub use connection::{connect_sqlite, init_schema, is_memory_url, normalize_sqlite_url, open_store};
pub use converters::{model_to_short_url, model_to_todo, new_todo_to_active_model};
pub use short_url::ShortUrlStore;
pub use todo::TodoStore;

use sea_orm::{DbErr, SqlErr};

/// 判断是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
