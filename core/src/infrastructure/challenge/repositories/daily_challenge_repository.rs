use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        challenge::{entities::DailyChallenge, ports::DailyChallengeRepository},
        common::entities::app_errors::CoreError,
    },
    entity::daily_challenges::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_db_err,
};

const TABLE: &str = "daily_challenges";

#[derive(Debug, Clone)]
pub struct PostgresDailyChallengeRepository {
    pub db: DatabaseConnection,
}

impl PostgresDailyChallengeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DailyChallengeRepository for PostgresDailyChallengeRepository {
    async fn list_for_date(&self, user_id: Uuid, date: NaiveDate) -> Result<Vec<DailyChallenge>, CoreError> {
        let challenges = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ChallengeDate.eq(date))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "list daily challenges", e))?;

        Ok(challenges.into_iter().map(DailyChallenge::from).collect())
    }

    async fn create_daily_challenges(
        &self,
        challenges: Vec<DailyChallenge>,
    ) -> Result<Vec<DailyChallenge>, CoreError> {
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
                .map_err(|e| map_db_err(TABLE, "create daily challenge", e))?;
            created.push(DailyChallenge::from(model));
        }

        txn.commit()
            .await
            .map_err(|e| map_db_err(TABLE, "commit daily challenges", e))?;

        Ok(created)
    }

    async fn get_by_id(&self, challenge_id: Uuid, user_id: Uuid) -> Result<Option<DailyChallenge>, CoreError> {
        let challenge = Entity::find()
            .filter(Column::Id.eq(challenge_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "fetch daily challenge", e))?;

        Ok(challenge.map(DailyChallenge::from))
    }

    async fn update_daily_challenge(&self, challenge: DailyChallenge) -> Result<DailyChallenge, CoreError> {
        let updated = ActiveModel::from(challenge)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => map_db_err(TABLE, "update daily challenge", e),
            })?;

        Ok(DailyChallenge::from(updated))
    }

    async fn count_completed_meal_logs(&self, user_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Completed.eq(true))
            .filter(Column::ChallengeType.starts_with("log_"))
            .count(&self.db)
            .await
            .map_err(|e| map_db_err(TABLE, "count meal logs", e))
    }
}
