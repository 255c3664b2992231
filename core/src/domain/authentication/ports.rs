use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Identity, CoreError>;
}
