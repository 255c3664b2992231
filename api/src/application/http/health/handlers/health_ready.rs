use axum::extract::State;
use weekfit_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "The database is not ready")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state
        .service
        .readness()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok(Response::OK(status))
}
