use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::ExternalServiceError(format!("database unreachable: {}", e))
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.ping().await?;

        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "postgres".to_string(),
            response_time_ms,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }
}
