use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::record_activity::{__path_record_activity, record_activity};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_profile, record_activity))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile).put(update_profile),
        )
        .route(
            &format!("{}/profile/activity", state.args.server.root_path),
            post(record_activity),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
