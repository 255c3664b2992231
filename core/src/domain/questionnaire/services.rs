use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::{entities::LoadedMenu, generator::generate_menu, ports::WeeklyMenuRepository},
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
    questionnaire::{
        catalog::questions,
        entities::{Question, QuestionnaireAnswers},
        flow::validate_answers,
        ports::QuestionnaireService,
    },
};

impl<P, M, C, D, A, PG, HC, LLM, FS> QuestionnaireService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    fn get_questions(&self) -> Vec<Question> {
        questions()
    }

    #[instrument(skip(self, identity, answers), fields(user_id = %identity.user_id))]
    async fn submit_questionnaire(
        &self,
        identity: Identity,
        answers: QuestionnaireAnswers,
    ) -> Result<LoadedMenu, CoreError> {
        validate_answers(&answers)?;

        self.store_preferences(&identity, &answers).await?;

        let menu = generate_menu(identity.id(), &answers, Utc::now().date_naive());
        let saved = self.persist_new_menu(menu).await?;
        info!(
            "Generated weekly menu {} for user {} ({:?})",
            saved.menu.id,
            identity.id(),
            saved.source
        );

        Ok(saved)
    }
}
