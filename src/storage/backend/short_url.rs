//! Data access for the `urls` table.

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use tracing::{debug, info, warn};

use super::{is_unique_violation, model_to_short_url, open_store};
use crate::config::DatabaseConfig;
use crate::errors::{LinkdoError, Result};
use crate::storage::ShortUrl;

use migration::ShortUrlMigrator;
use migration::entities::url;

/// Store for short-link records. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct ShortUrlStore {
    db: DatabaseConnection,
}

impl ShortUrlStore {
    /// 打开（必要时创建）存储文件并确保 `urls` 表存在
    pub async fn open(database_url: &str, options: &DatabaseConfig) -> Result<Self> {
        let db = open_store::<ShortUrlMigrator>(database_url, options).await?;
        info!("Short URL store opened: {}", database_url);
        Ok(Self { db })
    }

    /// Inserts one record. A duplicate `short_id` is reported as
    /// [`LinkdoError::Conflict`]; the existing row is never touched.
    pub async fn insert(&self, short_id: &str, full_url: &str) -> Result<ShortUrl> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LinkdoError::database_operation(format!("开始事务失败: {}", e)))?;

        let model = url::ActiveModel {
            id: NotSet,
            short_id: Set(short_id.to_string()),
            full_url: Set(full_url.to_string()),
        };

        let inserted = match url::Entity::insert(model).exec(&txn).await {
            Ok(result) => result,
            Err(e) if is_unique_violation(&e) => {
                warn!("Short id collision: {}", short_id);
                return Err(LinkdoError::conflict("URL already exists."));
            }
            Err(e) => {
                return Err(LinkdoError::database_operation(format!(
                    "插入短链接 '{}' 失败: {}",
                    short_id, e
                )));
            }
        };

        txn.commit()
            .await
            .map_err(|e| LinkdoError::database_operation(format!("提交事务失败: {}", e)))?;

        info!("Short link created: {} -> {}", short_id, full_url);
        Ok(ShortUrl {
            id: inserted.last_insert_id,
            short_id: short_id.to_string(),
            full_url: full_url.to_string(),
        })
    }

    pub async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>> {
        let model = url::Entity::find()
            .filter(url::Column::ShortId.eq(short_id))
            .one(&self.db)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("查询短链接失败: {}", e)))?;

        debug!("Lookup {} -> found={}", short_id, model.is_some());
        Ok(model.map(model_to_short_url))
    }

    /// 关闭连接池
    pub async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| LinkdoError::database_connection(format!("关闭数据库失败: {}", e)))
    }
}
