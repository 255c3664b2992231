use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::menu::{
    entities::LoadedMenu, ports::MenuService, value_objects::RegenerateMealInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::RegenerateMealValidator,
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
pub struct RegenerateMealResponse {
    pub data: LoadedMenu,
}

#[utoipa::path(
    post,
    path = "/current/regenerate",
    tag = "menu",
    summary = "Regenerate one meal",
    description = "Replaces the meal of one day and slot with another option that fits the caller's preferences.",
    responses(
        (status = 200, body = RegenerateMealResponse),
        (status = 404, description = "The menu has no meal in that slot")
    ),
    request_body = RegenerateMealValidator
)]
pub async fn regenerate_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegenerateMealValidator>,
) -> Result<Response<RegenerateMealResponse>, ApiError> {
    let menu = state
        .service
        .regenerate_meal(
            identity,
            RegenerateMealInput {
                day: payload.day,
                slot: payload.slot,
            },
        )
        .await?;

    Ok(Response::OK(RegenerateMealResponse { data: menu }))
}
