use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    achievement::ports::AchievementRepository,
    ai::ports::CompletionClient,
    authentication::value_objects::Identity,
    challenge::ports::{ChallengeRepository, DailyChallengeRepository},
    common::{entities::app_errors::CoreError, services::Service},
    fallback::{
        keys::{menu_key, preferences_key},
        ports::{FallbackStore, read_typed, write_typed},
    },
    health::ports::HealthCheckRepository,
    menu::{
        entities::{LoadedMenu, MenuSource, WeeklyMenu},
        generator,
        ports::{MenuService, WeeklyMenuRepository},
        sample::sample_menu,
        value_objects::RegenerateMealInput,
    },
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
    async fn fallback_menu(&self, identity: &Identity) -> LoadedMenu {
        let user_id = identity.id();

        match read_typed::<WeeklyMenu, _>(&self.fallback_store, &menu_key(user_id)).await {
            Ok(Some(mut menu)) => {
                if let Ok(Some(preferences)) =
                    read_typed::<serde_json::Value, _>(&self.fallback_store, &preferences_key(user_id))
                        .await
                {
                    menu.ai_preferences = preferences;
                }
                return LoadedMenu {
                    menu,
                    source: MenuSource::LocalFallback,
                };
            }
            Ok(None) => {}
            Err(e) => error!("Failed to read fallback menu: {}", e),
        }

        LoadedMenu {
            menu: sample_menu(user_id, Utc::now().date_naive()),
            source: MenuSource::Sample,
        }
    }

    /// Only questionnaire answers are written under `preferences_<user>`,
    /// AI request options or an empty object would replace them.
    async fn write_fallback_menu(&self, menu: &WeeklyMenu) -> Result<(), CoreError> {
        write_typed(&self.fallback_store, &menu_key(menu.user_id), menu).await?;

        match menu.answers() {
            Some(answers) => {
                write_typed(&self.fallback_store, &preferences_key(menu.user_id), &answers).await
            }
            None => Ok(()),
        }
    }

    /// Adds the caller's stored questionnaire answers to a menu built
    /// without them, keeping whatever preferences it already holds.
    pub(crate) async fn attach_answers(&self, identity: &Identity, menu: &mut WeeklyMenu) {
        if menu.answers().is_some() {
            return;
        }
        let Some(answers) = self.stored_preferences(identity).await else {
            return;
        };
        let Ok(serde_json::Value::Object(stored)) = serde_json::to_value(&answers) else {
            return;
        };

        match &mut menu.ai_preferences {
            serde_json::Value::Object(preferences) => preferences.extend(stored),
            other => *other = serde_json::Value::Object(stored),
        }
    }

    /// Inserts the menu, or keeps it in the fallback store when the table
    /// is missing.
    pub(crate) async fn persist_new_menu(&self, menu: WeeklyMenu) -> Result<LoadedMenu, CoreError> {
        match self.menu_repository.create_menu(menu.clone()).await {
            Ok(saved) => Ok(LoadedMenu {
                menu: saved,
                source: MenuSource::Database,
            }),
            Err(e) if e.is_table_missing() => {
                warn!("Weekly menus table is missing, saving menu locally");
                self.write_fallback_menu(&menu).await?;
                Ok(LoadedMenu {
                    menu,
                    source: MenuSource::LocalFallback,
                })
            }
            Err(e) => {
                error!("Failed to save weekly menu: {}", e);
                Err(e)
            }
        }
    }
}

impl<P, M, C, D, A, PG, HC, LLM, FS> MenuService for Service<P, M, C, D, A, PG, HC, LLM, FS>
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
    async fn load_current_menu(&self, identity: Identity) -> Result<LoadedMenu, CoreError> {
        match self.menu_repository.get_latest_by_user(identity.id()).await {
            Ok(Some(menu)) => Ok(LoadedMenu {
                menu,
                source: MenuSource::Database,
            }),
            Ok(None) => Ok(self.fallback_menu(&identity).await),
            Err(e) if e.is_table_missing() => {
                warn!("Weekly menus table is missing, checking the fallback store");
                Ok(self.fallback_menu(&identity).await)
            }
            Err(e) => {
                error!("Failed to fetch weekly menu: {}", e);
                Ok(LoadedMenu {
                    menu: sample_menu(identity.id(), Utc::now().date_naive()),
                    source: MenuSource::Sample,
                })
            }
        }
    }

    #[instrument(skip(self, identity, menu), fields(user_id = %identity.user_id))]
    async fn save_menu(&self, identity: Identity, mut menu: WeeklyMenu) -> Result<LoadedMenu, CoreError> {
        menu.user_id = identity.id();
        self.attach_answers(&identity, &mut menu).await;
        self.persist_new_menu(menu).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn regenerate_meal(
        &self,
        identity: Identity,
        input: RegenerateMealInput,
    ) -> Result<LoadedMenu, CoreError> {
        let LoadedMenu { mut menu, source } = self.load_current_menu(identity.clone()).await?;

        let answers = match menu.answers() {
            Some(answers) => answers,
            None => self.stored_preferences(&identity).await.unwrap_or_default(),
        };

        let replacement = generator::regenerate_meal(&mut menu, input.day, input.slot, &answers)?;
        info!(
            "Regenerated {} {} as '{}'",
            input.day, input.slot, replacement
        );

        if source != MenuSource::Database {
            return self.persist_new_menu(menu).await;
        }

        match self.menu_repository.update_menu(menu.clone()).await {
            Ok(updated) => Ok(LoadedMenu {
                menu: updated,
                source: MenuSource::Database,
            }),
            Err(e) if e.is_table_missing() => {
                self.write_fallback_menu(&menu).await?;
                Ok(LoadedMenu {
                    menu,
                    source: MenuSource::LocalFallback,
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{
            complete_answers, failing_menu_repository, failing_profile_repository, identity,
            missing_table, test_service,
        },
        menu::{
            catalog::{ANIMAL_PRODUCT_WORDS, MEAT_WORDS, mentions_any},
            entities::{DayOfWeek, MealSlot},
        },
        questionnaire::{catalog::VEGAN, entities::QuestionnaireAnswers, ports::QuestionnaireService},
    };

    #[tokio::test]
    async fn test_load_prefers_database() {
        let service = test_service();
        let caller = identity();
        let menu = generator::generate_menu(caller.user_id, &complete_answers(), Utc::now().date_naive());
        service.menu_repository.insert(menu.clone());

        let loaded = service.load_current_menu(caller).await.unwrap();

        assert_eq!(loaded.source, MenuSource::Database);
        assert_eq!(loaded.menu.id, menu.id);
    }

    #[tokio::test]
    async fn test_load_falls_back_to_sample() {
        let service = test_service();

        let loaded = service.load_current_menu(identity()).await.unwrap();

        assert_eq!(loaded.source, MenuSource::Sample);
        assert_eq!(loaded.menu.planned_meals().count(), 21);
    }

    #[tokio::test]
    async fn test_missing_table_saves_and_loads_locally() {
        let service =
            test_service().with_menu_repository(failing_menu_repository(missing_table("weekly_menus")));
        let caller = identity();
        let menu = generator::generate_menu(caller.user_id, &complete_answers(), Utc::now().date_naive());

        let saved = service.save_menu(caller.clone(), menu.clone()).await.unwrap();
        assert_eq!(saved.source, MenuSource::LocalFallback);
        assert!(service.fallback_store.contains(&menu_key(caller.user_id)));
        assert!(service.fallback_store.contains(&preferences_key(caller.user_id)));

        let loaded = service.load_current_menu(caller).await.unwrap();
        assert_eq!(loaded.source, MenuSource::LocalFallback);
        assert_eq!(loaded.menu.meals, menu.meals);
        assert_eq!(loaded.menu.answers(), Some(complete_answers()));
    }

    #[tokio::test]
    async fn test_other_database_errors_propagate_on_save() {
        let service =
            test_service().with_menu_repository(failing_menu_repository(CoreError::InternalServerError));
        let caller = identity();
        let menu = generator::generate_menu(caller.user_id, &complete_answers(), Utc::now().date_naive());

        let result = service.save_menu(caller, menu).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
        assert!(service.fallback_store.is_empty());
    }

    #[tokio::test]
    async fn test_edited_menu_keeps_vegan_answers_without_tables() {
        let service = test_service()
            .with_profile_repository(failing_profile_repository(missing_table("profiles")))
            .with_menu_repository(failing_menu_repository(missing_table("weekly_menus")));
        let caller = identity();
        let answers = QuestionnaireAnswers {
            restrictions: vec![VEGAN.to_string()],
            ..complete_answers()
        };

        let submitted = service
            .submit_questionnaire(caller.clone(), answers.clone())
            .await
            .unwrap();
        assert_eq!(submitted.source, MenuSource::LocalFallback);

        let edited = WeeklyMenu::new(
            caller.user_id,
            submitted.menu.week_start,
            submitted.menu.meals.clone(),
            submitted.menu.recipes.clone(),
            submitted.menu.shopping_list.clone(),
            serde_json::json!({}),
        );
        let saved = service.save_menu(caller.clone(), edited).await.unwrap();
        assert_eq!(saved.menu.answers(), Some(answers.clone()));
        let stored: Option<QuestionnaireAnswers> =
            read_typed(&service.fallback_store, &preferences_key(caller.user_id))
                .await
                .unwrap();
        assert_eq!(stored, Some(answers.clone()));

        let regenerated = service
            .regenerate_meal(
                caller,
                RegenerateMealInput {
                    day: DayOfWeek::Monday,
                    slot: MealSlot::Lunch,
                },
            )
            .await
            .unwrap();

        assert_eq!(regenerated.source, MenuSource::LocalFallback);
        assert_eq!(regenerated.menu.answers(), Some(answers));
        let lunch = regenerated.menu.meal(DayOfWeek::Monday, MealSlot::Lunch).unwrap();
        assert!(!mentions_any(lunch, MEAT_WORDS));
        assert!(!mentions_any(lunch, ANIMAL_PRODUCT_WORDS));
    }

    #[tokio::test]
    async fn test_menu_without_answers_leaves_fallback_preferences_alone() {
        let service =
            test_service().with_menu_repository(failing_menu_repository(missing_table("weekly_menus")));
        let caller = identity();
        let menu = WeeklyMenu::new(
            caller.user_id,
            Utc::now().date_naive(),
            Default::default(),
            Vec::new(),
            Default::default(),
            serde_json::json!({ "diet_goal": "bulking" }),
        );

        let saved = service.save_menu(caller.clone(), menu).await.unwrap();

        assert_eq!(saved.source, MenuSource::LocalFallback);
        assert!(service.fallback_store.contains(&menu_key(caller.user_id)));
        assert!(!service.fallback_store.contains(&preferences_key(caller.user_id)));
    }

    #[tokio::test]
    async fn test_regenerate_updates_stored_menu() {
        let service = test_service();
        let caller = identity();
        let menu = generator::generate_menu(caller.user_id, &complete_answers(), Utc::now().date_naive());
        let before = menu.meal(DayOfWeek::Monday, MealSlot::Lunch).unwrap().to_string();
        service.menu_repository.insert(menu.clone());

        let regenerated = service
            .regenerate_meal(
                caller,
                RegenerateMealInput {
                    day: DayOfWeek::Monday,
                    slot: MealSlot::Lunch,
                },
            )
            .await
            .unwrap();

        assert_eq!(regenerated.source, MenuSource::Database);
        assert_eq!(regenerated.menu.id, menu.id);
        let stored = service.menu_repository.latest(menu.user_id).unwrap();
        assert_ne!(stored.meal(DayOfWeek::Monday, MealSlot::Lunch).unwrap(), before);
    }

    #[tokio::test]
    async fn test_regenerate_sample_menu_saves_a_copy() {
        let service = test_service();
        let caller = identity();

        let regenerated = service
            .regenerate_meal(
                caller.clone(),
                RegenerateMealInput {
                    day: DayOfWeek::Sunday,
                    slot: MealSlot::Dinner,
                },
            )
            .await
            .unwrap();

        assert_eq!(regenerated.source, MenuSource::Database);
        assert_eq!(regenerated.menu.recipes.len(), 21);
        assert!(service.menu_repository.latest(caller.user_id).is_some());
    }
}
