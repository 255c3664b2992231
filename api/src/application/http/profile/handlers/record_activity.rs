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
pub struct RecordActivityResponse {
    pub data: Profile,
}

#[utoipa::path(
    post,
    path = "/activity",
    tag = "profile",
    summary = "Record daily activity",
    description = "Marks the caller as active today and updates the streak. Calling it again on the same day changes nothing.",
    responses(
        (status = 200, body = RecordActivityResponse)
    )
)]
pub async fn record_activity(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RecordActivityResponse>, ApiError> {
    let profile = state.service.record_activity(identity).await?;

    Ok(Response::OK(RecordActivityResponse { data: profile }))
}
