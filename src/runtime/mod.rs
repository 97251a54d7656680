//! Application lifecycle
//!
//! - `lifetime`: startup preparation and graceful shutdown
//! - `modes`: the HTTP server entry point for each service

pub mod lifetime;
pub mod modes;

pub use modes::{ServiceKind, run_server};
