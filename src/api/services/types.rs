//! Request and response bodies for both services.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LinkdoError, Result};
use crate::storage::NewTodo;
use crate::utils::url_validator::validate_url;

// ============ URL shortener ============

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenRequest {
    pub url: String,
}

impl ShortenRequest {
    /// 校验 URL，返回需要保存的字符串
    pub fn validated_url(&self) -> Result<&str> {
        validate_url(&self.url).map_err(|e| LinkdoError::validation(e.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolveResponse {
    pub url: String,
}

// ============ TODO ============

/// Body of `POST /items` and `PUT /items/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TodoPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoPayload {
    pub fn into_new_todo(self) -> Result<NewTodo> {
        if self.title.is_empty() {
            return Err(LinkdoError::validation("title must not be empty"));
        }
        Ok(NewTodo {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============ Root ============

/// Static payload served at `GET /`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceInfo {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    pub fn new(message: &str, endpoints: &[(&str, &str)]) -> Self {
        Self {
            message: message.to_string(),
            endpoints: endpoints
                .iter()
                .map(|(route, description)| (route.to_string(), description.to_string()))
                .collect(),
        }
    }
}
