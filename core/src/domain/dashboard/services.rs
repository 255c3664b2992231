use tracing::instrument;

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, ChallengeService, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    dashboard::{entities::Dashboard, ports::DashboardService},
    fallback::ports::FallbackStore,
    health::ports::HealthCheckRepository,
    menu::ports::{MenuService, WeeklyMenuRepository},
    profile::ports::ProfileRepository,
    progress::ports::ProgressRepository,
};

impl<P, M, C, D, A, PG, HC, LLM, FS> DashboardService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    async fn dashboard(&self, identity: Identity) -> Result<Dashboard, CoreError> {
        let (profile, challenges, menu) = futures::join!(
            self.load_profile(&identity),
            self.list_challenges(identity.clone()),
            self.load_current_menu(identity.clone()),
        );

        Ok(Dashboard {
            next_level_points: profile.next_level_points(),
            points_to_next_level: profile.points_to_next_level(),
            profile,
            challenges: challenges?,
            menu: menu?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{
            failing_challenge_repository, failing_menu_repository, failing_profile_repository,
            identity, missing_table, test_service,
        },
        menu::entities::MenuSource,
    };

    #[tokio::test]
    async fn test_dashboard_for_new_user() {
        let service = test_service();
        let caller = identity();

        let dashboard = service.dashboard(caller.clone()).await.unwrap();

        assert_eq!(dashboard.profile.id, caller.id());
        assert_eq!(dashboard.profile.points, 0);
        assert_eq!(dashboard.next_level_points, 500);
        assert_eq!(dashboard.points_to_next_level, 500);
        assert_eq!(dashboard.challenges.len(), 3);
        assert_eq!(dashboard.menu.source, MenuSource::Sample);
    }

    #[tokio::test]
    async fn test_dashboard_survives_missing_tables() {
        let service = test_service()
            .with_profile_repository(failing_profile_repository(missing_table("profiles")))
            .with_challenge_repository(failing_challenge_repository(missing_table("challenges")))
            .with_menu_repository(failing_menu_repository(missing_table("weekly_menus")));

        let dashboard = service.dashboard(identity()).await.unwrap();

        assert_eq!(dashboard.challenges.len(), 3);
        assert_eq!(dashboard.menu.source, MenuSource::Sample);
        assert_eq!(dashboard.profile.level.as_str(), "Bronze");
    }
}
