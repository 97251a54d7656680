//! HTTP layer: routing, request decoding, error translation.

pub mod middleware;
pub mod services;
