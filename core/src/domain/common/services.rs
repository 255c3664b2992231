use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

/// Every domain service trait is implemented on this struct; the type
/// parameters are the ports it talks to.
#[derive(Clone)]
pub struct Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    pub profile_repository: P,
    pub menu_repository: M,
    pub challenge_repository: C,
    pub daily_challenge_repository: D,
    pub achievement_repository: A,
    pub progress_repository: PG,
    pub health_check_repository: HC,
    pub completion_client: LLM,
    pub fallback_store: FS,
}

impl<P, M, C, D, A, PG, HC, LLM, FS> Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repository: P,
        menu_repository: M,
        challenge_repository: C,
        daily_challenge_repository: D,
        achievement_repository: A,
        progress_repository: PG,
        health_check_repository: HC,
        completion_client: LLM,
        fallback_store: FS,
    ) -> Self {
        Self {
            profile_repository,
            menu_repository,
            challenge_repository,
            daily_challenge_repository,
            achievement_repository,
            progress_repository,
            health_check_repository,
            completion_client,
            fallback_store,
        }
    }
}
