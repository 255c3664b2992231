use std::sync::Arc;

use weekfit_core::{application::WeekFitService, infrastructure::auth::HostedJwtVerifier};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: WeekFitService,
    pub token_verifier: Arc<HostedJwtVerifier>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: WeekFitService, token_verifier: HostedJwtVerifier) -> Self {
        Self {
            args,
            service,
            token_verifier: Arc::new(token_verifier),
        }
    }
}
