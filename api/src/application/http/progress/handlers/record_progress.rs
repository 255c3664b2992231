use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::progress::{entities::ProgressEntry, ports::ProgressService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        progress::validators::RecordProgressValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordProgressResponse {
    pub data: ProgressEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "progress",
    summary = "Record measurements",
    description = "Stores one entry. At least one measurement is required.",
    responses(
        (status = 201, body = RecordProgressResponse),
        (status = 400, description = "No measurement given"),
        (status = 422, description = "A measurement is out of range")
    ),
    request_body = RecordProgressValidator
)]
pub async fn record_progress(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecordProgressValidator>,
) -> Result<Response<RecordProgressResponse>, ApiError> {
    let entry = state
        .service
        .record_progress(identity, payload.into())
        .await?;

    Ok(Response::Created(RecordProgressResponse { data: entry }))
}
