use super::handlers::check_achievements::{__path_check_achievements, check_achievements};
use super::handlers::list_achievements::{__path_list_achievements, list_achievements};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_achievements, check_achievements))]
pub struct AchievementApiDoc;

pub fn achievement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/achievements", state.args.server.root_path),
            get(list_achievements),
        )
        .route(
            &format!("{}/achievements/check", state.args.server.root_path),
            post(check_achievements),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
