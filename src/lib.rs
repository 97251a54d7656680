//! Linkdo - two small JSON services backed by SQLite
//!
//! - **short-url**: issues 6-character short ids for full URLs and resolves them
//! - **todo**: create, list, fetch, replace and delete TODO items
//!
//! # Architecture
//! - `api`: HTTP handlers, payload types and middleware
//! - `services`: business rules on top of the stores
//! - `storage`: SQLite stores built on Sea-ORM
//! - `config`: TOML + environment configuration
//! - `runtime`: server startup and graceful shutdown
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
