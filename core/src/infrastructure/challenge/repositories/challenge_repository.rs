use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        challenge::{entities::Challenge, ports::ChallengeRepository},
        common::entities::app_errors::CoreError,
    },
    entity::challenges::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_db_err,
};

const TABLE: &str = "challenges";

#[derive(Debug, Clone)]
pub struct PostgresChallengeRepository {
    pub db: DatabaseConnection,
}

impl PostgresChallengeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ChallengeRepository for PostgresChallengeRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Challenge>, CoreError> {
        let challenges = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "list challenges", e))?;

        Ok(challenges.into_iter().map(Challenge::from).collect())
    }

    async fn create_challenges(&self, challenges: Vec<Challenge>) -> Result<Vec<Challenge>, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_db_err(TABLE, "start transaction", e))?;

        let mut created = Vec::with_capacity(challenges.len());
        for challenge in challenges {
            let model = Entity::insert(ActiveModel::from(challenge))
                .exec_with_returning(&txn)
                .await
                .map_err(|e| map_db_err(TABLE, "create challenge", e))?;
            created.push(Challenge::from(model));
        }

        txn.commit()
            .await
            .map_err(|e| map_db_err(TABLE, "commit challenges", e))?;

        Ok(created)
    }

    async fn get_by_id(&self, challenge_id: Uuid, user_id: Uuid) -> Result<Option<Challenge>, CoreError> {
        let challenge = Entity::find()
            .filter(Column::Id.eq(challenge_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "fetch challenge", e))?;

        Ok(challenge.map(Challenge::from))
    }

    async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge, CoreError> {
        let updated = ActiveModel::from(challenge)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => map_db_err(TABLE, "update challenge", e),
            })?;

        Ok(Challenge::from(updated))
    }
}
