use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::achievement::{entities::Achievement, ports::AchievementService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckAchievementsResponse {
    /// Achievements unlocked by this call only.
    pub data: Vec<Achievement>,
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "achievement",
    summary = "Unlock earned achievements",
    description = "Evaluates every locked achievement against the caller's current stats.",
    responses(
        (status = 200, body = CheckAchievementsResponse)
    )
)]
pub async fn check_achievements(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CheckAchievementsResponse>, ApiError> {
    let unlocked = state.service.check_and_unlock(identity).await?;

    Ok(Response::OK(CheckAchievementsResponse { data: unlocked }))
}
