use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use weekfit_core::domain::challenge::{
    entities::Challenge,
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
pub struct CompleteChallengeResponse {
    pub data: ChallengeCompletion<Challenge>,
}

#[utoipa::path(
    post,
    path = "/{challenge_id}/complete",
    tag = "challenge",
    summary = "Complete a challenge",
    description = "Marks the challenge as done and credits its points to the caller's profile.",
    params(
        ("challenge_id" = Uuid, Path, description = "Challenge id"),
    ),
    responses(
        (status = 200, body = CompleteChallengeResponse),
        (status = 404, description = "No such challenge for this caller"),
        (status = 409, description = "The challenge is already completed")
    )
)]
pub async fn complete_challenge(
    Path(challenge_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CompleteChallengeResponse>, ApiError> {
    let completion = state
        .service
        .complete_challenge(identity, challenge_id)
        .await?;

    Ok(Response::OK(CompleteChallengeResponse { data: completion }))
}
