use super::handlers::list_progress::{__path_list_progress, list_progress};
use super::handlers::record_progress::{__path_record_progress, record_progress};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_progress, record_progress))]
pub struct ProgressApiDoc;

pub fn progress_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/progress", state.args.server.root_path),
            get(list_progress).post(record_progress),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
