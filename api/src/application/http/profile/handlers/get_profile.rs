use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::profile::{entities::Profile, ports::ProfileService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Caller profile",
    description = "Returns the caller's profile, creating an empty one on first access.",
    responses(
        (status = 200, body = GetProfileResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state.service.get_or_create_profile(identity).await?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
