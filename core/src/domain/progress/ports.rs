use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    progress::{entities::ProgressEntry, value_objects::RecordProgressInput},
};

pub trait ProgressService: Send + Sync {
    fn record_progress(
        &self,
        identity: Identity,
        input: RecordProgressInput,
    ) -> impl Future<Output = Result<ProgressEntry, CoreError>> + Send;

    /// The most recent entries, oldest first.
    fn list_progress(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ProgressEntry>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProgressRepository: Send + Sync {
    fn create_entry(
        &self,
        entry: ProgressEntry,
    ) -> impl Future<Output = Result<ProgressEntry, CoreError>> + Send;

    /// Newest first.
    fn list_recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<ProgressEntry>, CoreError>> + Send;
}
