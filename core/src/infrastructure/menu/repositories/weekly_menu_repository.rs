use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        menu::{entities::WeeklyMenu, ports::WeeklyMenuRepository},
    },
    entity::weekly_menus::{Column, Entity},
    infrastructure::{db::errors::map_db_err, menu::mappers::active_model},
};

const TABLE: &str = "weekly_menus";

#[derive(Debug, Clone)]
pub struct PostgresWeeklyMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresWeeklyMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WeeklyMenuRepository for PostgresWeeklyMenuRepository {
    async fn get_latest_by_user(&self, user_id: Uuid) -> Result<Option<WeeklyMenu>, CoreError> {
        let menu = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "fetch weekly menu", e))?;

        menu.map(WeeklyMenu::try_from).transpose()
    }

    async fn create_menu(&self, menu: WeeklyMenu) -> Result<WeeklyMenu, CoreError> {
        let created = Entity::insert(active_model(&menu)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "create weekly menu", e))?;

        WeeklyMenu::try_from(created)
    }

    async fn update_menu(&self, menu: WeeklyMenu) -> Result<WeeklyMenu, CoreError> {
        let mut model = active_model(&menu)?;
        model.created_at = sea_orm::ActiveValue::NotSet;
        model.user_id = sea_orm::ActiveValue::NotSet;

        let updated = model.update(&self.db).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
            e => map_db_err(TABLE, "update weekly menu", e),
        })?;

        WeeklyMenu::try_from(updated)
    }
}
