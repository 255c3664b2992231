use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::Profile, ports::ProfileRepository},
    },
    entity::profiles::{ActiveModel, Entity},
    infrastructure::db::errors::map_db_err,
};

const TABLE: &str = "profiles";

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(profile: Profile) -> ActiveModel {
    ActiveModel {
        id: Set(profile.id),
        email: Set(profile.email),
        full_name: Set(profile.full_name),
        avatar_url: Set(profile.avatar_url),
        level: Set(profile.level.as_str().to_string()),
        points: Set(profile.points),
        current_streak: Set(profile.current_streak),
        max_streak: Set(profile.max_streak),
        last_active_date: Set(profile.last_active_date),
        preferences: Set(profile.preferences),
        created_at: Set(profile.created_at.fixed_offset()),
        updated_at: Set(profile.updated_at.fixed_offset()),
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        let profile = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "fetch profile", e))?;

        Ok(profile.map(Profile::from))
    }

    async fn create_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let created = Entity::insert(active_model(profile))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "create profile", e))?;

        Ok(Profile::from(created))
    }

    async fn update_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let mut model = active_model(profile);
        model.created_at = sea_orm::ActiveValue::NotSet;

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => map_db_err(TABLE, "update profile", e),
            })?;

        Ok(Profile::from(updated))
    }
}
