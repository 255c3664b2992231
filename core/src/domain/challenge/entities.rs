use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    Daily,
    Weekly,
    Monthly,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Daily => "daily",
            ChallengeType::Weekly => "weekly",
            ChallengeType::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for ChallengeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(ChallengeType::Daily),
            "weekly" => Ok(ChallengeType::Weekly),
            "monthly" => Ok(ChallengeType::Monthly),
            other => Err(CoreError::Invalid(format!("unknown challenge type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Challenge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub points_reward: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub challenge_type: ChallengeType,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    pub fn new(
        user_id: Uuid,
        title: &str,
        description: &str,
        points_reward: i32,
        challenge_type: ChallengeType,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            title: title.to_string(),
            description: description.to_string(),
            points_reward,
            completed: false,
            completed_at: None,
            challenge_type,
            created_at: Utc::now(),
        }
    }

    pub fn complete(&mut self) -> Result<(), CoreError> {
        if self.completed {
            return Err(CoreError::Conflict("challenge already completed".to_string()));
        }
        self.completed = true;
        self.completed_at = Some(Utc::now());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyChallenge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub challenge_date: NaiveDate,
    /// Template key, e.g. `log_breakfast`.
    pub challenge_type: String,
    pub description: String,
    pub points: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DailyChallenge {
    pub fn complete(&mut self) -> Result<(), CoreError> {
        if self.completed {
            return Err(CoreError::Conflict(
                "daily challenge already completed".to_string(),
            ));
        }
        self.completed = true;
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Whether completing it means a meal was logged.
    pub fn is_meal_log(&self) -> bool {
        self.challenge_type.starts_with("log_")
    }
}
