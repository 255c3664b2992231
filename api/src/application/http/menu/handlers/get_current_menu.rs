use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use weekfit_core::domain::menu::{entities::LoadedMenu, ports::MenuService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCurrentMenuResponse {
    pub data: LoadedMenu,
}

#[utoipa::path(
    get,
    path = "/current",
    tag = "menu",
    summary = "Current weekly menu",
    description = "The caller's latest weekly menu. `source` tells whether it came from the database, the local fallback store or the built-in sample.",
    responses(
        (status = 200, body = GetCurrentMenuResponse)
    )
)]
pub async fn get_current_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetCurrentMenuResponse>, ApiError> {
    let menu = state.service.load_current_menu(identity).await?;

    Ok(Response::OK(GetCurrentMenuResponse { data: menu }))
}
