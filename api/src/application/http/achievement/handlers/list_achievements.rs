use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use weekfit_core::domain::achievement::{entities::AchievementStatus, ports::AchievementService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListAchievementsResponse {
    pub data: Vec<AchievementStatus>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "achievement",
    summary = "Achievement catalog",
    description = "Every achievement with whether and when the caller unlocked it.",
    responses(
        (status = 200, body = ListAchievementsResponse)
    )
)]
pub async fn list_achievements(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ListAchievementsResponse>, ApiError> {
    let achievements = state.service.list_achievements(identity).await?;

    Ok(Response::OK(ListAchievementsResponse { data: achievements }))
}
