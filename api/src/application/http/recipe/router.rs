use super::handlers::suggest_recipes::{__path_suggest_recipes, suggest_recipes};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/suggestions", state.args.server.root_path),
            post(suggest_recipes),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
