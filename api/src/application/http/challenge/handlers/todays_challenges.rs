use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::challenge::{entities::DailyChallenge, ports::ChallengeService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TodaysChallengesResponse {
    pub data: Vec<DailyChallenge>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "daily-challenge",
    summary = "Today's challenges",
    description = "The caller's challenges for today. The first call of the day draws a new set.",
    responses(
        (status = 200, body = TodaysChallengesResponse)
    )
)]
pub async fn todays_challenges(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<TodaysChallengesResponse>, ApiError> {
    let challenges = state.service.todays_challenges(identity).await?;

    Ok(Response::OK(TodaysChallengesResponse { data: challenges }))
}
