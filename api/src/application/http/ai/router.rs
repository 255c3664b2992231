use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use super::handlers::generate_weekly_menu::{__path_generate_weekly_menu, generate_weekly_menu};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, generate_weekly_menu))]
pub struct AiApiDoc;

pub fn ai_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ai/recipe", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/ai/weekly-menu", state.args.server.root_path),
            post(generate_weekly_menu),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
