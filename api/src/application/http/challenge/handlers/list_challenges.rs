use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::challenge::{entities::Challenge, ports::ChallengeService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListChallengesResponse {
    pub data: Vec<Challenge>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "challenge",
    summary = "Weekly challenges",
    description = "Lists the caller's challenges, newest first. A caller without any gets the starter set.",
    responses(
        (status = 200, body = ListChallengesResponse)
    )
)]
pub async fn list_challenges(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ListChallengesResponse>, ApiError> {
    let challenges = state.service.list_challenges(identity).await?;

    Ok(Response::OK(ListChallengesResponse { data: challenges }))
}
