use super::handlers::get_questions::{__path_get_questions, get_questions};
use super::handlers::submit_questionnaire::{__path_submit_questionnaire, submit_questionnaire};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_questions, submit_questionnaire))]
pub struct QuestionnaireApiDoc;

pub fn questionnaire_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/questionnaire", state.args.server.root_path),
            get(get_questions),
        )
        .route(
            &format!("{}/questionnaire/submit", state.args.server.root_path),
            post(submit_questionnaire),
        )
        .layer(middleware::from_fn_with_state(
            state.token_verifier.clone(),
            auth,
        ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use clap::Parser;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use sea_orm::DatabaseConnection;
    use uuid::Uuid;
    use weekfit_core::{
        domain::common::{WeekFitConfig, services::Service},
        infrastructure::{
            achievement::PostgresAchievementRepository,
            auth::HostedJwtVerifier,
            challenge::{PostgresChallengeRepository, PostgresDailyChallengeRepository},
            fallback::FileFallbackStore,
            health::PostgresHealthCheckRepository,
            llm::GatewayCompletionClient,
            menu::PostgresWeeklyMenuRepository,
            profile::PostgresProfileRepository,
            progress::PostgresProgressRepository,
        },
    };

    use super::*;
    use crate::args::Args;

    const SECRET: &str = "test-secret-test-secret-test-secret";

    /// Routes over a database that was never connected and a fallback
    /// store in `fallback_dir`.
    fn server(fallback_dir: &std::path::Path) -> TestServer {
        let args = Args::try_parse_from([
            "weekfit-api",
            "--jwt-secret",
            SECRET,
            "--fallback-dir",
            &fallback_dir.to_string_lossy(),
        ])
        .unwrap();
        let config = WeekFitConfig::from(args.clone());
        let db = DatabaseConnection::Disconnected;
        let service = Service::new(
            PostgresProfileRepository::new(db.clone()),
            PostgresWeeklyMenuRepository::new(db.clone()),
            PostgresChallengeRepository::new(db.clone()),
            PostgresDailyChallengeRepository::new(db.clone()),
            PostgresAchievementRepository::new(db.clone()),
            PostgresProgressRepository::new(db.clone()),
            PostgresHealthCheckRepository::new(db),
            GatewayCompletionClient::new(&config.ai),
            FileFallbackStore::new(&config.fallback.directory),
        );
        let state = AppState::new(
            Arc::new(args),
            service,
            HostedJwtVerifier::new(&config.auth),
        );

        TestServer::new(questionnaire_routes(state.clone()).with_state(state)).unwrap()
    }

    fn answers() -> serde_json::Value {
        serde_json::json!({
            "goal": "emagrecimento",
            "restrictions": ["vegano"],
            "budget": "moderado",
            "cooking_time": "rapido",
            "experience": "iniciante",
            "cuisines": ["brasileira"],
            "meals": ["cafe", "almoco", "jantar"],
        })
    }

    fn token(secret: &str) -> String {
        let claims = serde_json::json!({
            "sub": Uuid::new_v4().to_string(),
            "exp": Utc::now().timestamp() + 600,
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn stored_entries(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_submit_without_token_is_rejected_before_storing() {
        let dir = tempfile::tempdir().unwrap();

        let response = server(dir.path())
            .post("/questionnaire/submit")
            .json(&answers())
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "E_UNAUTHORIZED");
        assert_eq!(stored_entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_submit_with_forged_token_is_rejected_before_storing() {
        let dir = tempfile::tempdir().unwrap();

        let response = server(dir.path())
            .post("/questionnaire/submit")
            .authorization_bearer(token("some-other-secret-some-other"))
            .json(&answers())
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(stored_entries(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_submit_with_valid_token_reaches_the_service() {
        let dir = tempfile::tempdir().unwrap();

        let response = server(dir.path())
            .post("/questionnaire/submit")
            .authorization_bearer(token(SECRET))
            .json(&answers())
            .await;

        assert_ne!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_questions_are_public() {
        let dir = tempfile::tempdir().unwrap();

        let response = server(dir.path()).get("/questionnaire").await;

        response.assert_status_ok();
    }
}
