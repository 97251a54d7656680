pub mod short_url_service;
pub mod todo_service;

pub use short_url_service::{IdGenerator, RandomIdGenerator, ShortUrlService, UrlStats};
pub use todo_service::TodoService;
