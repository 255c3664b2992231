use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use weekfit_core::domain::challenge::{
    entities::DailyChallenge,
    ports::{ChallengeCompletion, ChallengeService},
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CompleteDailyChallengeResponse {
    pub data: ChallengeCompletion<DailyChallenge>,
}

#[utoipa::path(
    post,
    path = "/{challenge_id}/complete",
    tag = "daily-challenge",
    summary = "Complete a daily challenge",
    description = "Marks today's challenge as done and credits its points to the caller's profile.",
    params(
        ("challenge_id" = Uuid, Path, description = "Daily challenge id"),
    ),
    responses(
        (status = 200, body = CompleteDailyChallengeResponse),
        (status = 404, description = "No such challenge for this caller"),
        (status = 409, description = "The challenge is already completed")
    )
)]
pub async fn complete_daily_challenge(
    Path(challenge_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CompleteDailyChallengeResponse>, ApiError> {
    let completion = state
        .service
        .complete_daily_challenge(identity, challenge_id)
        .await?;

    Ok(Response::OK(CompleteDailyChallengeResponse { data: completion }))
}
