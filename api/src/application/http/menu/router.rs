use super::handlers::get_current_menu::{__path_get_current_menu, get_current_menu};
use super::handlers::regenerate_meal::{__path_regenerate_meal, regenerate_meal};
use super::handlers::save_current_menu::{__path_save_current_menu, save_current_menu};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_current_menu, save_current_menu, regenerate_meal))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus/current", state.args.server.root_path),
            get(get_current_menu).put(save_current_menu),
        )
        .route(
            &format!("{}/menus/current/regenerate", state.args.server.root_path),
            post(regenerate_meal),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
