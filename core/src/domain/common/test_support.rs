use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    achievement::{
        entities::{Achievement, UserAchievement},
        ports::{AchievementRepository, MockAchievementRepository},
    },
    ai::ports::{CompletionClient, MockCompletionClient},
    authentication::value_objects::Identity,
    challenge::{
        entities::{Challenge, DailyChallenge},
        ports::{ChallengeRepository, DailyChallengeRepository, MockChallengeRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    fallback::ports::FallbackStore,
    health::ports::{HealthCheckRepository, MockHealthCheckRepository},
    menu::{
        entities::WeeklyMenu,
        ports::{MockWeeklyMenuRepository, WeeklyMenuRepository},
    },
    profile::{
        entities::Profile,
        ports::{MockProfileRepository, ProfileRepository},
    },
    progress::{entities::ProgressEntry, ports::ProgressRepository},
    questionnaire::QuestionnaireAnswers,
};

/// A table held in memory for tests that need rows to outlive one call.
#[derive(Clone)]
pub struct InMemoryTable<T> {
    rows: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> InMemoryTable<T> {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn rows(&self) -> MutexGuard<'_, Vec<T>> {
        self.rows.lock().unwrap()
    }

    fn replace(&self, row: T, same: impl Fn(&T) -> bool) -> Result<T, CoreError> {
        let mut rows = self.rows();
        let slot = rows.iter_mut().find(|r| same(r)).ok_or(CoreError::NotFound)?;
        *slot = row.clone();
        Ok(row)
    }
}

pub type InMemoryProfileRepository = InMemoryTable<Profile>;
pub type InMemoryMenuRepository = InMemoryTable<WeeklyMenu>;
pub type InMemoryChallengeRepository = InMemoryTable<Challenge>;
pub type InMemoryDailyChallengeRepository = InMemoryTable<DailyChallenge>;
pub type InMemoryAchievementRepository = InMemoryTable<UserAchievement>;
pub type InMemoryProgressRepository = InMemoryTable<ProgressEntry>;

impl InMemoryProfileRepository {
    pub fn get(&self, user_id: Uuid) -> Option<Profile> {
        self.rows.lock().unwrap().iter().find(|p| p.id == user_id).cloned()
    }

    pub fn insert(&self, profile: Profile) {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| p.id != profile.id);
        rows.push(profile);
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        Ok(self.rows().iter().find(|p| p.id == user_id).cloned())
    }

    async fn create_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let mut rows = self.rows();
        if rows.iter().any(|p| p.id == profile.id) {
            return Err(CoreError::Conflict("profile already exists".to_string()));
        }
        rows.push(profile.clone());
        Ok(profile)
    }

    async fn update_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let id = profile.id;
        self.replace(profile, |p| p.id == id)
    }
}

impl InMemoryMenuRepository {
    pub fn latest(&self, user_id: Uuid) -> Option<WeeklyMenu> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.user_id == user_id)
            .cloned()
    }

    pub fn insert(&self, menu: WeeklyMenu) {
        self.rows.lock().unwrap().push(menu);
    }
}

impl WeeklyMenuRepository for InMemoryMenuRepository {
    async fn get_latest_by_user(&self, user_id: Uuid) -> Result<Option<WeeklyMenu>, CoreError> {
        Ok(self
            .rows()
            .iter()
            .rev()
            .find(|m| m.user_id == user_id)
            .cloned())
    }

    async fn create_menu(&self, menu: WeeklyMenu) -> Result<WeeklyMenu, CoreError> {
        self.rows().push(menu.clone());
        Ok(menu)
    }

    async fn update_menu(&self, menu: WeeklyMenu) -> Result<WeeklyMenu, CoreError> {
        let id = menu.id;
        self.replace(menu, |m| m.id == id)
    }
}

impl ChallengeRepository for InMemoryChallengeRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Challenge>, CoreError> {
        let mut challenges: Vec<Challenge> = self
            .rows()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        challenges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(challenges)
    }

    async fn create_challenges(&self, challenges: Vec<Challenge>) -> Result<Vec<Challenge>, CoreError> {
        self.rows().extend(challenges.iter().cloned());
        Ok(challenges)
    }

    async fn get_by_id(&self, challenge_id: Uuid, user_id: Uuid) -> Result<Option<Challenge>, CoreError> {
        Ok(self
            .rows()
            .iter()
            .find(|c| c.id == challenge_id && c.user_id == user_id)
            .cloned())
    }

    async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge, CoreError> {
        let id = challenge.id;
        self.replace(challenge, |c| c.id == id)
    }
}

impl DailyChallengeRepository for InMemoryDailyChallengeRepository {
    async fn list_for_date(&self, user_id: Uuid, date: NaiveDate) -> Result<Vec<DailyChallenge>, CoreError> {
        Ok(self
            .rows()
            .iter()
            .filter(|c| c.user_id == user_id && c.challenge_date == date)
            .cloned()
            .collect())
    }

    async fn create_daily_challenges(
        &self,
        challenges: Vec<DailyChallenge>,
    ) -> Result<Vec<DailyChallenge>, CoreError> {
        self.rows().extend(challenges.iter().cloned());
        Ok(challenges)
    }

    async fn get_by_id(&self, challenge_id: Uuid, user_id: Uuid) -> Result<Option<DailyChallenge>, CoreError> {
        Ok(self
            .rows()
            .iter()
            .find(|c| c.id == challenge_id && c.user_id == user_id)
            .cloned())
    }

    async fn update_daily_challenge(&self, challenge: DailyChallenge) -> Result<DailyChallenge, CoreError> {
        let id = challenge.id;
        self.replace(challenge, |c| c.id == id)
    }

    async fn count_completed_meal_logs(&self, user_id: Uuid) -> Result<u64, CoreError> {
        Ok(self
            .rows()
            .iter()
            .filter(|c| c.user_id == user_id && c.completed && c.is_meal_log())
            .count() as u64)
    }
}

impl AchievementRepository for InMemoryAchievementRepository {
    /// No catalog rows are stored, so callers use the built-in catalog.
    async fn list_achievements(&self) -> Result<Vec<Achievement>, CoreError> {
        Ok(Vec::new())
    }

    async fn list_unlocked(&self, user_id: Uuid) -> Result<Vec<UserAchievement>, CoreError> {
        Ok(self
            .rows()
            .iter()
            .filter(|u| u.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn unlock(&self, unlock: UserAchievement) -> Result<UserAchievement, CoreError> {
        self.rows().push(unlock.clone());
        Ok(unlock)
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    async fn create_entry(&self, entry: ProgressEntry) -> Result<ProgressEntry, CoreError> {
        self.rows().push(entry.clone());
        Ok(entry)
    }

    async fn list_recent(&self, user_id: Uuid, limit: u64) -> Result<Vec<ProgressEntry>, CoreError> {
        let mut entries: Vec<ProgressEntry> = self
            .rows()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.recorded_date.cmp(&a.recorded_date));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryFallbackStore {
    entries: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl InMemoryFallbackStore {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl FallbackStore for InMemoryFallbackStore {
    async fn read(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

pub type TestService = Service<
    InMemoryProfileRepository,
    InMemoryMenuRepository,
    InMemoryChallengeRepository,
    InMemoryDailyChallengeRepository,
    InMemoryAchievementRepository,
    InMemoryProgressRepository,
    MockHealthCheckRepository,
    MockCompletionClient,
    InMemoryFallbackStore,
>;

/// In-memory tables and an empty fallback store. The health repository and
/// the completion client are mocks without expectations, swap them in with
/// [`Service::with_health_check_repository`] and
/// [`Service::with_completion_client`].
pub fn test_service() -> TestService {
    Service::new(
        InMemoryTable::default(),
        InMemoryTable::default(),
        InMemoryTable::default(),
        InMemoryTable::default(),
        InMemoryTable::default(),
        InMemoryTable::default(),
        MockHealthCheckRepository::new(),
        MockCompletionClient::new(),
        InMemoryFallbackStore::default(),
    )
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
    pub fn with_profile_repository<R: ProfileRepository>(
        self,
        repository: R,
    ) -> Service<R, M, C, D, A, PG, HC, LLM, FS> {
        Service::new(
            repository,
            self.menu_repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            self.progress_repository,
            self.health_check_repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_menu_repository<R: WeeklyMenuRepository>(
        self,
        repository: R,
    ) -> Service<P, R, C, D, A, PG, HC, LLM, FS> {
        Service::new(
            self.profile_repository,
            repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            self.progress_repository,
            self.health_check_repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_challenge_repository<R: ChallengeRepository>(
        self,
        repository: R,
    ) -> Service<P, M, R, D, A, PG, HC, LLM, FS> {
        Service::new(
            self.profile_repository,
            self.menu_repository,
            repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            self.progress_repository,
            self.health_check_repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_achievement_repository<R: AchievementRepository>(
        self,
        repository: R,
    ) -> Service<P, M, C, D, R, PG, HC, LLM, FS> {
        Service::new(
            self.profile_repository,
            self.menu_repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            repository,
            self.progress_repository,
            self.health_check_repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_progress_repository<R: ProgressRepository>(
        self,
        repository: R,
    ) -> Service<P, M, C, D, A, R, HC, LLM, FS> {
        Service::new(
            self.profile_repository,
            self.menu_repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            repository,
            self.health_check_repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_health_check_repository<R: HealthCheckRepository>(
        self,
        repository: R,
    ) -> Service<P, M, C, D, A, PG, R, LLM, FS> {
        Service::new(
            self.profile_repository,
            self.menu_repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            self.progress_repository,
            repository,
            self.completion_client,
            self.fallback_store,
        )
    }

    pub fn with_completion_client<L: CompletionClient>(
        self,
        client: L,
    ) -> Service<P, M, C, D, A, PG, HC, L, FS> {
        Service::new(
            self.profile_repository,
            self.menu_repository,
            self.challenge_repository,
            self.daily_challenge_repository,
            self.achievement_repository,
            self.progress_repository,
            self.health_check_repository,
            client,
            self.fallback_store,
        )
    }
}

pub fn missing_table(name: &str) -> CoreError {
    CoreError::TableMissing(name.to_string())
}

/// Every call fails with `error`.
pub fn failing_profile_repository(error: CoreError) -> MockProfileRepository {
    let mut repository = MockProfileRepository::new();
    let e = error.clone();
    repository
        .expect_get_by_id()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    let e = error.clone();
    repository
        .expect_create_profile()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    repository
        .expect_update_profile()
        .returning(move |_| Box::pin(std::future::ready(Err(error.clone()))));
    repository
}

/// Every call fails with `error`.
pub fn failing_menu_repository(error: CoreError) -> MockWeeklyMenuRepository {
    let mut repository = MockWeeklyMenuRepository::new();
    let e = error.clone();
    repository
        .expect_get_latest_by_user()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    let e = error.clone();
    repository
        .expect_create_menu()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    repository
        .expect_update_menu()
        .returning(move |_| Box::pin(std::future::ready(Err(error.clone()))));
    repository
}

/// Every call fails with `error`.
pub fn failing_challenge_repository(error: CoreError) -> MockChallengeRepository {
    let mut repository = MockChallengeRepository::new();
    let e = error.clone();
    repository
        .expect_list_by_user()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    let e = error.clone();
    repository
        .expect_create_challenges()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    let e = error.clone();
    repository
        .expect_get_by_id()
        .returning(move |_, _| Box::pin(std::future::ready(Err(e.clone()))));
    repository
        .expect_update_challenge()
        .returning(move |_| Box::pin(std::future::ready(Err(error.clone()))));
    repository
}

/// Every call fails with `error`.
pub fn failing_achievement_repository(error: CoreError) -> MockAchievementRepository {
    let mut repository = MockAchievementRepository::new();
    let e = error.clone();
    repository
        .expect_list_achievements()
        .returning(move || Box::pin(std::future::ready(Err(e.clone()))));
    let e = error.clone();
    repository
        .expect_list_unlocked()
        .returning(move |_| Box::pin(std::future::ready(Err(e.clone()))));
    repository
        .expect_unlock()
        .returning(move |_| Box::pin(std::future::ready(Err(error.clone()))));
    repository
}

/// Answers every completion with `reply`.
pub fn replying_client(reply: Result<String, CoreError>) -> MockCompletionClient {
    let mut client = MockCompletionClient::new();
    client
        .expect_complete()
        .returning(move |_| Box::pin(std::future::ready(reply.clone())));
    client
}

/// A fresh caller each time.
pub fn identity() -> Identity {
    Identity::new(Uuid::new_v4(), Some("ana@example.com".to_string()))
}

pub fn complete_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        goal: "emagrecimento".to_string(),
        restrictions: vec!["nenhuma".to_string()],
        budget: "moderado".to_string(),
        cooking_time: "rapido".to_string(),
        experience: "iniciante".to_string(),
        cuisines: vec!["brasileira".to_string()],
        meals: vec!["cafe".to_string(), "almoco".to_string(), "jantar".to_string()],
    }
}
