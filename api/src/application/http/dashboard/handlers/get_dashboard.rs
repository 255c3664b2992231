use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use weekfit_core::domain::dashboard::{entities::Dashboard, ports::DashboardService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct GetDashboardResponse {
    pub data: Dashboard,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dashboard",
    summary = "Home screen",
    description = "Profile, weekly challenges and current menu in one call, plus the points left to the next level.",
    responses(
        (status = 200, body = GetDashboardResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetDashboardResponse>, ApiError> {
    let dashboard = state.service.dashboard(identity).await?;

    Ok(Response::OK(GetDashboardResponse { data: dashboard }))
}
