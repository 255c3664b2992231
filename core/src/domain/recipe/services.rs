use tracing::instrument;

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
    recipe::{assistant, entities::Recipe, ports::RecipeService},
};

impl<P, M, C, D, A, PG, HC, LLM, FS> RecipeService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    #[instrument(skip(self))]
    async fn suggest_recipes(&self, ingredients: String) -> Result<Vec<Recipe>, CoreError> {
        assistant::suggest_recipes(&ingredients)
    }
}
