use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::profile::{entities::Profile, ports::ProfileService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        profile::validators::UpdateProfileValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    put,
    path = "",
    tag = "profile",
    summary = "Update profile",
    description = "Changes the display name and avatar. Omitted fields are left as they are.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 422, description = "Invalid name or avatar URL")
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(identity, payload.into())
        .await?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
