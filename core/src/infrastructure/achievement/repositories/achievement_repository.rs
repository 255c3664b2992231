use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    domain::{
        achievement::{
            entities::{Achievement, UserAchievement},
            ports::AchievementRepository,
        },
        common::entities::app_errors::CoreError,
    },
    entity::{achievements, user_achievements},
    infrastructure::db::errors::map_db_err,
};

#[derive(Debug, Clone)]
pub struct PostgresAchievementRepository {
    pub db: DatabaseConnection,
}

impl PostgresAchievementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AchievementRepository for PostgresAchievementRepository {
    async fn list_achievements(&self) -> Result<Vec<Achievement>, CoreError> {
        let achievements = achievements::Entity::find()
            .order_by_asc(achievements::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("achievements", "list achievements", e))?;

        Ok(achievements.into_iter().map(Achievement::from).collect())
    }

    async fn list_unlocked(&self, user_id: Uuid) -> Result<Vec<UserAchievement>, CoreError> {
        let unlocked = user_achievements::Entity::find()
            .filter(user_achievements::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("user_achievements", "list unlocked achievements", e))?;

        Ok(unlocked.into_iter().map(UserAchievement::from).collect())
    }

    async fn unlock(&self, unlock: UserAchievement) -> Result<UserAchievement, CoreError> {
        let model = user_achievements::ActiveModel {
            id: Set(unlock.id),
            user_id: Set(unlock.user_id),
            achievement_id: Set(unlock.achievement_id),
            unlocked_at: Set(unlock.unlocked_at.fixed_offset()),
        };

        let created = user_achievements::Entity::insert(model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_err("user_achievements", "unlock achievement", e))?;

        Ok(UserAchievement::from(created))
    }
}
