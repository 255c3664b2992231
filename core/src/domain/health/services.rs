use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

impl<P, M, C, D, A, PG, HC, LLM, FS> HealthCheckService for Service<P, M, C, D, A, PG, HC, LLM, FS>
where
    P: ProfileRepository,
    M: WeeklyMenuRepository,
    C: ChallengeRepository,
    D: DailyChallengeRepository,
    A: AchievementRepository,
    PG: ProgressRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
    FS: FallbackStore,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
