use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        progress::{entities::ProgressEntry, ports::ProgressRepository},
    },
    entity::user_progress::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_db_err,
};

const TABLE: &str = "user_progress";

#[derive(Debug, Clone)]
pub struct PostgresProgressRepository {
    pub db: DatabaseConnection,
}

impl PostgresProgressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProgressRepository for PostgresProgressRepository {
    async fn create_entry(&self, entry: ProgressEntry) -> Result<ProgressEntry, CoreError> {
        let created = Entity::insert(ActiveModel::from(entry))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "record progress", e))?;

        Ok(ProgressEntry::from(created))
    }

    async fn list_recent(&self, user_id: Uuid, limit: u64) -> Result<Vec<ProgressEntry>, CoreError> {
        let entries = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::RecordedDate)
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "list progress", e))?;

        Ok(entries.into_iter().map(ProgressEntry::from).collect())
    }
}
