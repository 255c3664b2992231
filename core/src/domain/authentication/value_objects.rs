use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated caller. The hosted auth provider owns sign-up and
/// sessions, this is only what its tokens tell us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: Uuid, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }
}
