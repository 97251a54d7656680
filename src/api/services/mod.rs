pub mod helpers;
pub mod short_url;
pub mod todo;
pub mod types;

pub use helpers::{ErrorBody, json_config, path_config};
pub use short_url::short_url_routes;
pub use todo::todo_routes;
