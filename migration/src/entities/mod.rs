pub mod todo;
pub mod url;
