use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::{
        keys::preferences_key,
        ports::{FallbackStore, read_typed, write_typed},
    },
    health::ports::HealthCheckRepository,
    menu::ports::WeeklyMenuRepository,
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
        value_objects::UpdateProfileInput,
    },
    progress::ports::ProgressRepository,
    questionnaire::QuestionnaireAnswers,
};

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
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
    /// The stored profile, inserted when absent. Errors are returned as is.
    pub(crate) async fn existing_profile(&self, identity: &Identity) -> Result<Profile, CoreError> {
        match self.profile_repository.get_by_id(identity.id()).await? {
            Some(profile) => Ok(profile),
            None => {
                info!("Creating profile for user {}", identity.id());
                self.profile_repository
                    .create_profile(Profile::new(identity))
                    .await
            }
        }
    }

    /// Like [`Self::existing_profile`] but any failure yields a default
    /// profile. Without a profiles table the preferences come from the
    /// fallback store.
    pub(crate) async fn load_profile(&self, identity: &Identity) -> Profile {
        let user_id = identity.id();

        match self.profile_repository.get_by_id(user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                let profile = Profile::new(identity);
                match self.profile_repository.create_profile(profile.clone()).await {
                    Ok(created) => created,
                    Err(e) => {
                        error!("Failed to create profile for user {}: {}", user_id, e);
                        profile
                    }
                }
            }
            Err(e) if e.is_table_missing() => {
                warn!("Profiles table is missing, using a default profile");
                let mut profile = Profile::new(identity);
                match read_typed::<serde_json::Value, _>(&self.fallback_store, &preferences_key(user_id))
                    .await
                {
                    Ok(Some(preferences)) => profile.preferences = preferences,
                    Ok(None) => {}
                    Err(e) => error!("Failed to read fallback preferences: {}", e),
                }
                profile
            }
            Err(e) => {
                error!("Failed to fetch profile for user {}: {}", user_id, e);
                Profile::new(identity)
            }
        }
    }

    pub(crate) async fn award_points(
        &self,
        identity: &Identity,
        points: i32,
    ) -> Result<Profile, CoreError> {
        let mut profile = self.existing_profile(identity).await?;
        profile.award(points);
        info!(
            "User {} earned {} points, now {} ({})",
            identity.id(),
            points,
            profile.points,
            profile.level.as_str()
        );

        self.profile_repository.update_profile(profile).await
    }

    /// Saves questionnaire answers as the profile preferences, or in the
    /// fallback store when the profiles table is missing.
    pub(crate) async fn store_preferences(
        &self,
        identity: &Identity,
        answers: &QuestionnaireAnswers,
    ) -> Result<(), CoreError> {
        let user_id = identity.id();
        let preferences = serde_json::to_value(answers).map_err(|e| {
            error!("Failed to encode preferences: {}", e);
            CoreError::InternalServerError
        })?;

        let outcome = match self.existing_profile(identity).await {
            Ok(mut profile) => {
                profile.preferences = preferences.clone();
                profile.updated_at = Utc::now();
                self.profile_repository.update_profile(profile).await.map(|_| ())
            }
            Err(e) => Err(e),
        };

        match outcome {
            Err(e) if e.is_table_missing() => {
                warn!("Profiles table is missing, keeping preferences locally");
                write_typed(&self.fallback_store, &preferences_key(user_id), &preferences).await
            }
            other => other,
        }
    }

    pub(crate) async fn stored_preferences(&self, identity: &Identity) -> Option<QuestionnaireAnswers> {
        self.load_profile(identity).await.answers()
    }
}

impl<P, M, C, D, A, PG, HC, LLM, FS> ProfileService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    async fn get_or_create_profile(&self, identity: Identity) -> Result<Profile, CoreError> {
        Ok(self.load_profile(&identity).await)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.user_id))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<Profile, CoreError> {
        let mut profile = self.existing_profile(&identity).await?;

        if let Some(full_name) = input.full_name {
            profile.full_name = non_blank(full_name);
        }
        if let Some(avatar_url) = input.avatar_url {
            profile.avatar_url = non_blank(avatar_url);
        }
        profile.updated_at = Utc::now();

        self.profile_repository.update_profile(profile).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn record_activity(&self, identity: Identity) -> Result<Profile, CoreError> {
        let mut profile = self.existing_profile(&identity).await?;

        if !profile.record_activity(Utc::now().date_naive()) {
            return Ok(profile);
        }

        self.profile_repository.update_profile(profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{
            TestService, complete_answers, failing_profile_repository, identity, missing_table,
            test_service,
        },
        profile::{entities::Level, ports::MockProfileRepository},
    };

    #[tokio::test]
    async fn test_get_or_create_inserts_default_profile() {
        let service: TestService = test_service();
        let caller = identity();

        let profile = service.get_or_create_profile(caller.clone()).await.unwrap();

        assert_eq!(profile.id, caller.user_id);
        assert_eq!(profile.level, Level::Bronze);
        assert_eq!(profile.points, 0);
        assert!(service.profile_repository.get(caller.user_id).is_some());
    }

    #[tokio::test]
    async fn test_get_or_create_degrades_on_insert_failure() {
        let mut repository = MockProfileRepository::new();
        repository
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(None))));
        repository
            .expect_create_profile()
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Err(CoreError::InternalServerError))));
        let service = test_service().with_profile_repository(repository);

        let profile = service.get_or_create_profile(identity()).await.unwrap();

        assert_eq!(profile.level, Level::Bronze);
        assert_eq!(profile.points, 0);
    }

    #[tokio::test]
    async fn test_update_profile_surfaces_database_errors() {
        let service = test_service()
            .with_profile_repository(failing_profile_repository(CoreError::InternalServerError));

        let result = service
            .update_profile(
                identity(),
                UpdateProfileInput {
                    full_name: Some("Ana".to_string()),
                    avatar_url: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_missing_table_reads_fallback_preferences() {
        let service =
            test_service().with_profile_repository(failing_profile_repository(missing_table("profiles")));
        let caller = identity();
        service
            .store_preferences(&caller, &complete_answers())
            .await
            .unwrap();

        let profile = service.get_or_create_profile(caller.clone()).await.unwrap();

        assert_eq!(profile.answers(), Some(complete_answers()));
        assert!(
            service
                .fallback_store
                .contains(&preferences_key(caller.user_id))
        );
    }

    #[tokio::test]
    async fn test_store_preferences_updates_profile() {
        let service = test_service();
        let caller = identity();

        service
            .store_preferences(&caller, &complete_answers())
            .await
            .unwrap();

        let stored = service.profile_repository.get(caller.user_id).unwrap();
        assert_eq!(stored.answers(), Some(complete_answers()));
        assert_eq!(
            service.stored_preferences(&caller).await,
            Some(complete_answers())
        );
    }

    #[tokio::test]
    async fn test_update_profile_trims_fields() {
        let service = test_service();
        let caller = identity();

        let profile = service
            .update_profile(
                caller.clone(),
                UpdateProfileInput {
                    full_name: Some("  Ana Souza ".to_string()),
                    avatar_url: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ana Souza"));

        let cleared = service
            .update_profile(
                caller,
                UpdateProfileInput {
                    full_name: Some("   ".to_string()),
                    avatar_url: Some("https://cdn.weekfit.app/a.png".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.full_name, None);
        assert_eq!(cleared.avatar_url.as_deref(), Some("https://cdn.weekfit.app/a.png"));
    }

    #[tokio::test]
    async fn test_record_activity_is_idempotent_per_day() {
        let service = test_service();
        let caller = identity();

        let first = service.record_activity(caller.clone()).await.unwrap();
        let second = service.record_activity(caller).await.unwrap();

        assert_eq!(first.current_streak, 1);
        assert_eq!(second.current_streak, 1);
        assert_eq!(second.max_streak, 1);
    }

    #[tokio::test]
    async fn test_award_points_levels_up() {
        let service = test_service();
        let caller = identity();

        service.award_points(&caller, 400).await.unwrap();
        let profile = service.award_points(&caller, 200).await.unwrap();

        assert_eq!(profile.points, 600);
        assert_eq!(profile.level, Level::Silver);
    }
}
