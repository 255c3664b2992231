use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::{
        entities::{Challenge, DailyChallenge},
        ports::{
            ChallengeCompletion, ChallengeRepository, ChallengeService, DailyChallengeRepository,
        },
        templates::{default_challenges, pick_daily_challenges},
    },
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

impl<P, M, C, D, A, PG, HC, LLM, FS> ChallengeService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    async fn list_challenges(&self, identity: Identity) -> Result<Vec<Challenge>, CoreError> {
        let user_id = identity.id();

        let challenges = match self.challenge_repository.list_by_user(user_id).await {
            Ok(challenges) => challenges,
            Err(e) if e.is_table_missing() => {
                warn!("Challenges table is missing, using default challenges");
                return Ok(default_challenges(user_id));
            }
            Err(e) => {
                error!("Failed to fetch challenges: {}", e);
                return Ok(Vec::new());
            }
        };

        if !challenges.is_empty() {
            return Ok(challenges);
        }

        info!("Seeding default challenges for user {}", user_id);
        match self
            .challenge_repository
            .create_challenges(default_challenges(user_id))
            .await
        {
            Ok(created) => Ok(created),
            Err(e) => {
                error!("Failed to create default challenges: {}", e);
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn complete_challenge(
        &self,
        identity: Identity,
        challenge_id: Uuid,
    ) -> Result<ChallengeCompletion<Challenge>, CoreError> {
        let mut challenge = self
            .challenge_repository
            .get_by_id(challenge_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        challenge.complete()?;
        let challenge = self.challenge_repository.update_challenge(challenge).await?;
        let profile = self
            .award_points(&identity, challenge.points_reward)
            .await?;

        Ok(ChallengeCompletion { challenge, profile })
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn todays_challenges(&self, identity: Identity) -> Result<Vec<DailyChallenge>, CoreError> {
        let user_id = identity.id();
        let today = Utc::now().date_naive();

        let existing = match self
            .daily_challenge_repository
            .list_for_date(user_id, today)
            .await
        {
            Ok(existing) => existing,
            Err(e) => {
                error!("Failed to fetch daily challenges: {}", e);
                return Ok(Vec::new());
            }
        };

        if !existing.is_empty() {
            return Ok(existing);
        }

        let picks = {
            let mut rng = rand::thread_rng();
            pick_daily_challenges(&mut rng, user_id, today)
        };

        match self
            .daily_challenge_repository
            .create_daily_challenges(picks)
            .await
        {
            Ok(created) => Ok(created),
            Err(e) => {
                error!("Failed to generate daily challenges: {}", e);
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn complete_daily_challenge(
        &self,
        identity: Identity,
        challenge_id: Uuid,
    ) -> Result<ChallengeCompletion<DailyChallenge>, CoreError> {
        let mut challenge = self
            .daily_challenge_repository
            .get_by_id(challenge_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        challenge.complete()?;
        let challenge = self
            .daily_challenge_repository
            .update_daily_challenge(challenge)
            .await?;
        let profile = self.award_points(&identity, challenge.points).await?;

        Ok(ChallengeCompletion { challenge, profile })
    }
}
