use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::progress::{entities::ProgressEntry, ports::ProgressService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListProgressResponse {
    pub data: Vec<ProgressEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "progress",
    summary = "Body measurement history",
    description = "The caller's 30 most recent entries, oldest first.",
    responses(
        (status = 200, body = ListProgressResponse)
    )
)]
pub async fn list_progress(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ListProgressResponse>, ApiError> {
    let entries = state.service.list_progress(identity).await?;

    Ok(Response::OK(ListProgressResponse { data: entries }))
}
