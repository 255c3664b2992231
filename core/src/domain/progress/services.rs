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
    menu::ports::WeeklyMenuRepository,
    profile::ports::ProfileRepository,
    progress::{
        entities::{HISTORY_LENGTH, ProgressEntry},
        ports::{ProgressRepository, ProgressService},
        value_objects::RecordProgressInput,
    },
};

impl<P, M, C, D, A, PG, HC, LLM, FS> ProgressService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    #[instrument(skip(self, identity, input), fields(user_id = %identity.user_id))]
    async fn record_progress(
        &self,
        identity: Identity,
        input: RecordProgressInput,
    ) -> Result<ProgressEntry, CoreError> {
        let entry = ProgressEntry::new(identity.id(), input, Utc::now().date_naive())?;
        let created = self.progress_repository.create_entry(entry).await?;
        info!("Recorded progress {} for {}", created.id, created.recorded_date);

        Ok(created)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn list_progress(&self, identity: Identity) -> Result<Vec<ProgressEntry>, CoreError> {
        let mut entries = self
            .progress_repository
            .list_recent(identity.id(), HISTORY_LENGTH)
            .await?;
        entries.reverse();

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::common::test_support::{identity, test_service};

    #[tokio::test]
    async fn test_history_is_latest_thirty_ascending() {
        let service = test_service();
        let caller = identity();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        for day in 0..35 {
            service
                .record_progress(
                    caller.clone(),
                    RecordProgressInput {
                        recorded_date: Some(start + Duration::days(day)),
                        weight: Some(80.0 - day as f64 * 0.1),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        let history = service.list_progress(caller).await.unwrap();

        assert_eq!(history.len(), 30);
        assert_eq!(history[0].recorded_date, start + Duration::days(5));
        assert_eq!(history[29].recorded_date, start + Duration::days(34));
        assert!(history.windows(2).all(|w| w[0].recorded_date <= w[1].recorded_date));
    }

    #[tokio::test]
    async fn test_invalid_entry_is_not_stored() {
        let service = test_service();
        let caller = identity();

        let result = service
            .record_progress(caller.clone(), RecordProgressInput::default())
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert!(service.list_progress(caller).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entries_are_per_user() {
        let service = test_service();
        let (ana, bruno) = (identity(), identity());
        service
            .record_progress(
                ana.clone(),
                RecordProgressInput {
                    waist_circumference: Some(82.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(service.list_progress(ana).await.unwrap().len(), 1);
        assert!(service.list_progress(bruno).await.unwrap().is_empty());
    }
}
