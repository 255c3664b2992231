use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu::{
        entities::{LoadedMenu, WeeklyMenu},
        value_objects::RegenerateMealInput,
    },
};

pub trait MenuService: Send + Sync {
    fn load_current_menu(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<LoadedMenu, CoreError>> + Send;

    fn save_menu(
        &self,
        identity: Identity,
        menu: WeeklyMenu,
    ) -> impl Future<Output = Result<LoadedMenu, CoreError>> + Send;

    fn regenerate_meal(
        &self,
        identity: Identity,
        input: RegenerateMealInput,
    ) -> impl Future<Output = Result<LoadedMenu, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait WeeklyMenuRepository: Send + Sync {
    fn get_latest_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<WeeklyMenu>, CoreError>> + Send;

    fn create_menu(
        &self,
        menu: WeeklyMenu,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;

    fn update_menu(
        &self,
        menu: WeeklyMenu,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;
}
