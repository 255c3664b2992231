use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use weekfit_core::domain::profile::value_objects::UpdateProfileInput;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[validate(length(max = 120, message = "full_name is too long"))]
    pub full_name: Option<String>,

    #[validate(url(message = "avatar_url must be a URL"))]
    pub avatar_url: Option<String>,
}

impl From<UpdateProfileValidator> for UpdateProfileInput {
    fn from(payload: UpdateProfileValidator) -> Self {
        UpdateProfileInput {
            full_name: payload.full_name,
            avatar_url: payload.avatar_url,
        }
    }
}
