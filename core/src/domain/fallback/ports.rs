use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

/// Local key-value store used when the hosted backend tables are missing.
pub trait FallbackStore: Send + Sync {
    fn read(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, CoreError>> + Send;

    fn write(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Reads and decodes a fallback entry. An entry that no longer decodes is
/// treated as absent.
pub async fn read_typed<T, F>(store: &F, key: &str) -> Result<Option<T>, CoreError>
where
    T: DeserializeOwned,
    F: FallbackStore,
{
    let Some(value) = store.read(key).await? else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            warn!("Discarding undecodable fallback entry {}: {}", key, e);
            Ok(None)
        }
    }
}

pub async fn write_typed<T, F>(store: &F, key: &str, value: &T) -> Result<(), CoreError>
where
    T: Serialize,
    F: FallbackStore,
{
    let value = serde_json::to_value(value).map_err(|e| {
        tracing::error!("Failed to encode fallback entry {}: {}", key, e);
        CoreError::InternalServerError
    })?;

    store.write(key, value).await
}
