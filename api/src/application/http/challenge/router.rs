use super::handlers::complete_challenge::{__path_complete_challenge, complete_challenge};
use super::handlers::complete_daily_challenge::{
    __path_complete_daily_challenge, complete_daily_challenge,
};
use super::handlers::list_challenges::{__path_list_challenges, list_challenges};
use super::handlers::todays_challenges::{__path_todays_challenges, todays_challenges};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_challenges, complete_challenge))]
pub struct ChallengeApiDoc;

#[derive(OpenApi)]
#[openapi(paths(todays_challenges, complete_daily_challenge))]
pub struct DailyChallengeApiDoc;

pub fn challenge_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/challenges", root_path), get(list_challenges))
        .route(
            &format!("{}/challenges/{{challenge_id}}/complete", root_path),
            post(complete_challenge),
        )
        .route(
            &format!("{}/daily-challenges", root_path),
            get(todays_challenges),
        )
        .route(
            &format!("{}/daily-challenges/{{challenge_id}}/complete", root_path),
            post(complete_daily_challenge),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}
