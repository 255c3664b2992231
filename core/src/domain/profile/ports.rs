use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, value_objects::UpdateProfileInput},
};

pub trait ProfileService: Send + Sync {
    fn get_or_create_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn record_activity(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;

    fn create_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}
