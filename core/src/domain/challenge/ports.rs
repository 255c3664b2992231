use std::future::Future;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    challenge::entities::{Challenge, DailyChallenge},
    common::entities::app_errors::CoreError,
    profile::entities::Profile,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChallengeCompletion<T> {
    pub challenge: T,
    pub profile: Profile,
}

pub trait ChallengeService: Send + Sync {
    fn list_challenges(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Challenge>, CoreError>> + Send;

    fn complete_challenge(
        &self,
        identity: Identity,
        challenge_id: Uuid,
    ) -> impl Future<Output = Result<ChallengeCompletion<Challenge>, CoreError>> + Send;

    fn todays_challenges(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<DailyChallenge>, CoreError>> + Send;

    fn complete_daily_challenge(
        &self,
        identity: Identity,
        challenge_id: Uuid,
    ) -> impl Future<Output = Result<ChallengeCompletion<DailyChallenge>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChallengeRepository: Send + Sync {
    /// Newest first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Challenge>, CoreError>> + Send;

    fn create_challenges(
        &self,
        challenges: Vec<Challenge>,
    ) -> impl Future<Output = Result<Vec<Challenge>, CoreError>> + Send;

    fn get_by_id(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Challenge>, CoreError>> + Send;

    fn update_challenge(
        &self,
        challenge: Challenge,
    ) -> impl Future<Output = Result<Challenge, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DailyChallengeRepository: Send + Sync {
    fn list_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<DailyChallenge>, CoreError>> + Send;

    fn create_daily_challenges(
        &self,
        challenges: Vec<DailyChallenge>,
    ) -> impl Future<Output = Result<Vec<DailyChallenge>, CoreError>> + Send;

    fn get_by_id(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<DailyChallenge>, CoreError>> + Send;

    fn update_daily_challenge(
        &self,
        challenge: DailyChallenge,
    ) -> impl Future<Output = Result<DailyChallenge, CoreError>> + Send;

    /// Completed `log_*` challenges over all days.
    fn count_completed_meal_logs(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
