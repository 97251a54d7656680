//! Data access for the `todos` table.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info};

use super::{model_to_todo, new_todo_to_active_model, open_store};
use crate::config::DatabaseConfig;
use crate::errors::{LinkdoError, Result};
use crate::storage::{NewTodo, Todo};

use migration::TodoMigrator;
use migration::entities::todo;

/// Store for todo records. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct TodoStore {
    db: DatabaseConnection,
}

impl TodoStore {
    /// 打开（必要时创建）存储文件并确保 `todos` 表存在
    pub async fn open(database_url: &str, options: &DatabaseConfig) -> Result<Self> {
        let db = open_store::<TodoMigrator>(database_url, options).await?;
        info!("Todo store opened: {}", database_url);
        Ok(Self { db })
    }

    async fn begin(&self) -> Result<DatabaseTransaction> {
        self.db
            .begin()
            .await
            .map_err(|e| LinkdoError::database_operation(format!("开始事务失败: {}", e)))
    }

    async fn commit(txn: DatabaseTransaction) -> Result<()> {
        txn.commit()
            .await
            .map_err(|e| LinkdoError::database_operation(format!("提交事务失败: {}", e)))
    }

    /// 插入新记录，返回数据库分配的 id
    pub async fn insert(&self, item: &NewTodo) -> Result<i64> {
        let txn = self.begin().await?;

        let result = todo::Entity::insert(new_todo_to_active_model(item))
            .exec(&txn)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("插入 TODO 失败: {}", e)))?;

        Self::commit(txn).await?;
        info!("Todo created: {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    /// 全表读取，按 id 升序
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let models = todo::Entity::find()
            .order_by_asc(todo::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("加载 TODO 列表失败: {}", e)))?;

        debug!("Loaded {} todos", models.len());
        Ok(models.into_iter().map(model_to_todo).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        let model = todo::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("查询 TODO 失败: {}", e)))?;

        Ok(model.map(model_to_todo))
    }

    /// Overwrites title, description and completed in one statement.
    /// Returns the number of rows affected (0 or 1).
    pub async fn update(&self, id: i64, item: &NewTodo) -> Result<u64> {
        let txn = self.begin().await?;

        let result = todo::Entity::update_many()
            .set(new_todo_to_active_model(item))
            .filter(todo::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("更新 TODO 失败: {}", e)))?;

        Self::commit(txn).await?;
        debug!("Todo {} update affected {} rows", id, result.rows_affected);
        Ok(result.rows_affected)
    }

    /// 删除记录，返回受影响行数（0 或 1）
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let txn = self.begin().await?;

        let result = todo::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| LinkdoError::database_operation(format!("删除 TODO 失败: {}", e)))?;

        Self::commit(txn).await?;
        debug!("Todo {} delete affected {} rows", id, result.rows_affected);
        Ok(result.rows_affected)
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
