use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    achievement::entities::{Achievement, AchievementStatus, UserAchievement},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

pub trait AchievementService: Send + Sync {
    fn list_achievements(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<AchievementStatus>, CoreError>> + Send;

    /// Unlocks every achievement whose requirement is now met and returns
    /// the ones unlocked by this call.
    fn check_and_unlock(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Achievement>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AchievementRepository: Send + Sync {
    fn list_achievements(&self) -> impl Future<Output = Result<Vec<Achievement>, CoreError>> + Send;

    fn list_unlocked(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UserAchievement>, CoreError>> + Send;

    fn unlock(
        &self,
        unlock: UserAchievement,
    ) -> impl Future<Output = Result<UserAchievement, CoreError>> + Send;
}
