use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::entities::app_errors::CoreError;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("Connected to the database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), CoreError> {
        MIGRATOR
            .run(self.db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to run database migrations: {}", e);
                CoreError::InternalServerError
            })?;

        info!("Migrations applied successfully");
        Ok(())
    }
}
