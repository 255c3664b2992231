use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub ai_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        ai_enabled: state
            .args
            .ai
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty()),
    })
}
