use chrono::Utc;
use tracing::{error, info, instrument};

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::{
        convert::into_weekly_menu,
        entities::{AiRecipe, AiWeeklyMenu, GeneratedWeeklyMenu},
        parsing::{INVALID_MENU_FORMAT, INVALID_RECIPE_FORMAT, parse_reply},
        ports::{AiService, CompletionClient},
        prompts,
        value_objects::{GenerateRecipeInput, GenerateWeeklyMenuInput},
    },
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

impl<P, M, C, D, A, PG, HC, LLM, FS> AiService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> Result<AiRecipe, CoreError> {
        let reply = self
            .completion_client
            .complete(prompts::recipe_request(&input))
            .await?;

        let recipe: AiRecipe = parse_reply(&reply, INVALID_RECIPE_FORMAT).map_err(|e| {
            error!("Failed to parse recipe reply: {}", e);
            e
        })?;
        info!("Generated recipe '{}'", recipe.name);

        Ok(recipe)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn generate_weekly_menu(
        &self,
        identity: Identity,
        input: GenerateWeeklyMenuInput,
    ) -> Result<GeneratedWeeklyMenu, CoreError> {
        let reply = self
            .completion_client
            .complete(prompts::weekly_menu_request(&input))
            .await?;

        let menu: AiWeeklyMenu = parse_reply(&reply, INVALID_MENU_FORMAT).map_err(|e| {
            error!("Failed to parse weekly menu reply: {}", e);
            e
        })?;
        info!("Generated weekly menu with {} days", menu.weekly_menu.len());

        if !input.save {
            return Ok(GeneratedWeeklyMenu { menu, saved: None });
        }

        let preferences = serde_json::to_value(&input).unwrap_or_default();
        let mut weekly_menu =
            into_weekly_menu(&menu, identity.id(), Utc::now().date_naive(), preferences)?;
        self.attach_answers(&identity, &mut weekly_menu).await;
        let saved = self.persist_new_menu(weekly_menu).await?;

        Ok(GeneratedWeeklyMenu {
            menu,
            saved: Some(saved),
        })
    }
}
