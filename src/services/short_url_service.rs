//! URL shortening service
//!
//! Generates one short id per request and relies on the store's unique
//! constraint to reject collisions. A collision is surfaced to the caller
//! as a conflict; there is no retry with a fresh id.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{LinkdoError, Result};
use crate::storage::ShortUrlStore;
use crate::utils::{SHORT_ID_LENGTH, generate_random_code};

/// 短链 ID 生成器
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 默认生成器：62 字符字母表上的均匀随机
#[derive(Debug, Clone, Copy)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(SHORT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_random_code(self.length)
    }
}

/// Result of a stats lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStats {
    pub short_id: String,
    pub full_url: String,
}

pub struct ShortUrlService {
    store: Arc<ShortUrlStore>,
    base_url: String,
    generator: Arc<dyn IdGenerator>,
}

impl ShortUrlService {
    pub fn new(store: Arc<ShortUrlStore>, base_url: impl Into<String>) -> Self {
        Self::with_generator(store, base_url, Arc::new(RandomIdGenerator::default()))
    }

    pub fn with_generator(
        store: Arc<ShortUrlStore>,
        base_url: impl Into<String>,
        generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            store,
            base_url: base_url.into(),
            generator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整短链：base_url 与 short_id 之间恰好一个 `/`
    pub fn short_url_for(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_id)
    }

    /// Stores `full_url` under a freshly generated id and returns the
    /// complete short URL.
    pub async fn shorten(&self, full_url: &str) -> Result<String> {
        let short_id = self.generator.generate();
        debug!("Generated short id {} for {}", short_id, full_url);

        let record = self.store.insert(&short_id, full_url).await?;
        let short_url = self.short_url_for(&record.short_id);
        info!("Shortened {} -> {}", full_url, short_url);
        Ok(short_url)
    }

    /// 解析短链 ID 对应的完整 URL
    pub async fn resolve(&self, short_id: &str) -> Result<String> {
        self.lookup(short_id).await.map(|stats| stats.full_url)
    }

    pub async fn stats(&self, short_id: &str) -> Result<UrlStats> {
        self.lookup(short_id).await
    }

    async fn lookup(&self, short_id: &str) -> Result<UrlStats> {
        match self.store.find_by_short_id(short_id).await? {
            Some(record) => Ok(UrlStats {
                short_id: record.short_id,
                full_url: record.full_url,
            }),
            None => Err(LinkdoError::not_found("URL not found.")),
        }
    }
}
