use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, fallback::ports::FallbackStore};

/// One JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct FileFallbackStore {
    directory: PathBuf,
}

impl FileFallbackStore {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoreError::Invalid(format!("invalid fallback key '{}'", key)));
        }

        Ok(self.directory.join(format!("{}.json", key)))
    }
}

fn io_err(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    error!("Failed to {} {}: {}", action, path.display(), e);
    CoreError::InternalServerError
}

impl FallbackStore for FileFallbackStore {
    async fn read(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        let path = self.path_for(key)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err("read", &path, e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                error!("Corrupt fallback entry {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    async fn write(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| io_err("create", &self.directory, e))?;

        let bytes = serde_json::to_vec_pretty(&value).map_err(|e| {
            error!("Failed to encode fallback entry {}: {}", key, e);
            CoreError::InternalServerError
        })?;

        // Readers never see a half-written file. Each write gets its own
        // temp file so concurrent writers of one key do not share it.
        let tmp = self
            .directory
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()));
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| io_err("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_err("rename", &tmp, e))?;

        debug!("Stored fallback entry {}", key);
        Ok(())
    }
}
