use tracing::{error, info, instrument, warn};

use crate::domain::{
    achievement::{
        entities::{Achievement, AchievementStatus, UserAchievement, default_catalog},
        ports::{AchievementRepository, AchievementService},
    },
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

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
    async fn achievement_catalog(&self) -> Vec<Achievement> {
        match self.achievement_repository.list_achievements().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => default_catalog(),
            Err(e) if e.is_table_missing() => {
                warn!("Achievements table is missing, using the built-in catalog");
                default_catalog()
            }
            Err(e) => {
                error!("Failed to fetch achievements: {}", e);
                default_catalog()
            }
        }
    }
}

impl<P, M, C, D, A, PG, HC, LLM, FS> AchievementService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    async fn list_achievements(&self, identity: Identity) -> Result<Vec<AchievementStatus>, CoreError> {
        let catalog = self.achievement_catalog().await;
        let unlocked = self
            .achievement_repository
            .list_unlocked(identity.id())
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to fetch unlocked achievements: {}", e);
                Vec::new()
            });

        Ok(catalog
            .into_iter()
            .map(|achievement| {
                let unlock = unlocked.iter().find(|u| u.achievement_id == achievement.id);
                AchievementStatus {
                    unlocked: unlock.is_some(),
                    unlocked_at: unlock.map(|u| u.unlocked_at),
                    achievement,
                }
            })
            .collect())
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn check_and_unlock(&self, identity: Identity) -> Result<Vec<Achievement>, CoreError> {
        let user_id = identity.id();
        let profile = self.load_profile(&identity).await;

        let meals_logged = self
            .daily_challenge_repository
            .count_completed_meal_logs(user_id)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to count logged meals: {}", e);
                0
            });

        let unlocked = match self.achievement_repository.list_unlocked(user_id).await {
            Ok(unlocked) => unlocked,
            Err(e) if e.is_table_missing() => {
                warn!("User achievements table is missing, nothing can be unlocked");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut newly_unlocked = Vec::new();
        for achievement in self.achievement_catalog().await {
            if unlocked.iter().any(|u| u.achievement_id == achievement.id) {
                continue;
            }
            if !achievement.is_met(profile.current_streak, meals_logged) {
                continue;
            }

            if let Err(e) = self
                .achievement_repository
                .unlock(UserAchievement::new(user_id, achievement.id))
                .await
            {
                error!("Failed to unlock achievement {}: {}", achievement.name, e);
                continue;
            }

            self.award_points(&identity, achievement.points).await?;
            info!("User {} unlocked '{}'", user_id, achievement.name);
            newly_unlocked.push(achievement);
        }

        Ok(newly_unlocked)
    }
}
