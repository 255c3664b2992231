use sea_orm::ActiveValue::Set;

use crate::{
    domain::challenge::entities::{Challenge, ChallengeType, DailyChallenge},
    entity::{challenges, daily_challenges},
};

impl From<challenges::Model> for Challenge {
    fn from(model: challenges::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            points_reward: model.points_reward,
            completed: model.completed,
            completed_at: model.completed_at.map(|dt| dt.to_utc()),
            challenge_type: model.challenge_type.parse().unwrap_or(ChallengeType::Weekly),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<Challenge> for challenges::ActiveModel {
    fn from(challenge: Challenge) -> Self {
        Self {
            id: Set(challenge.id),
            user_id: Set(challenge.user_id),
            title: Set(challenge.title),
            description: Set(challenge.description),
            points_reward: Set(challenge.points_reward),
            completed: Set(challenge.completed),
            completed_at: Set(challenge.completed_at.map(|dt| dt.fixed_offset())),
            challenge_type: Set(challenge.challenge_type.as_str().to_string()),
            created_at: Set(challenge.created_at.fixed_offset()),
        }
    }
}

impl From<daily_challenges::Model> for DailyChallenge {
    fn from(model: daily_challenges::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            challenge_date: model.challenge_date,
            challenge_type: model.challenge_type,
            description: model.description,
            points: model.points,
            completed: model.completed,
            completed_at: model.completed_at.map(|dt| dt.to_utc()),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<DailyChallenge> for daily_challenges::ActiveModel {
    fn from(challenge: DailyChallenge) -> Self {
        Self {
            id: Set(challenge.id),
            user_id: Set(challenge.user_id),
            challenge_date: Set(challenge.challenge_date),
            challenge_type: Set(challenge.challenge_type),
            description: Set(challenge.description),
            points: Set(challenge.points),
            completed: Set(challenge.completed),
            completed_at: Set(challenge.completed_at.map(|dt| dt.fixed_offset())),
            created_at: Set(challenge.created_at.fixed_offset()),
        }
    }
}
