use crate::{
    domain::common::{WeekFitConfig, services::Service},
    infrastructure::{
        achievement::PostgresAchievementRepository,
        challenge::{PostgresChallengeRepository, PostgresDailyChallengeRepository},
        db::postgres::{Postgres, PostgresConfig},
        fallback::FileFallbackStore,
        health::PostgresHealthCheckRepository,
        llm::GatewayCompletionClient,
        menu::PostgresWeeklyMenuRepository,
        profile::PostgresProfileRepository,
        progress::PostgresProgressRepository,
    },
};

pub type WeekFitService = Service<
    PostgresProfileRepository,
    PostgresWeeklyMenuRepository,
    PostgresChallengeRepository,
    PostgresDailyChallengeRepository,
    PostgresAchievementRepository,
    PostgresProgressRepository,
    PostgresHealthCheckRepository,
    GatewayCompletionClient,
    FileFallbackStore,
>;

pub async fn create_service(config: WeekFitConfig) -> Result<WeekFitService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    if config.database.run_migrations {
        postgres.run_migrations().await?;
    }

    let db = postgres.get_db();

    Ok(Service::new(
        PostgresProfileRepository::new(db.clone()),
        PostgresWeeklyMenuRepository::new(db.clone()),
        PostgresChallengeRepository::new(db.clone()),
        PostgresDailyChallengeRepository::new(db.clone()),
        PostgresAchievementRepository::new(db.clone()),
        PostgresProgressRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GatewayCompletionClient::new(&config.ai),
        FileFallbackStore::new(&config.fallback.directory),
    ))
}
