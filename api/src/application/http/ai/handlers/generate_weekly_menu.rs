use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::ai::{entities::GeneratedWeeklyMenu, ports::AiService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ai::validators::GenerateWeeklyMenuValidator,
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
pub struct GenerateWeeklyMenuResponse {
    pub data: GeneratedWeeklyMenu,
}

#[utoipa::path(
    post,
    path = "/weekly-menu",
    tag = "ai",
    summary = "Generate a weekly menu",
    description = "Asks the language model for a seven day menu. With `save` the result also replaces the caller's current menu.",
    responses(
        (status = 200, body = GenerateWeeklyMenuResponse),
        (status = 402, description = "The AI gateway has no credits left"),
        (status = 429, description = "The AI gateway is rate limiting"),
        (status = 500, description = "The model reply could not be used")
    ),
    request_body = GenerateWeeklyMenuValidator
)]
pub async fn generate_weekly_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateWeeklyMenuValidator>,
) -> Result<Response<GenerateWeeklyMenuResponse>, ApiError> {
    let menu = state
        .service
        .generate_weekly_menu(identity, payload.into())
        .await?;

    Ok(Response::OK(GenerateWeeklyMenuResponse { data: menu }))
}
