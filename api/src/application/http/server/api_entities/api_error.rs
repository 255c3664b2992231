use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;
use weekfit_core::domain::common::entities::app_errors::CoreError;

pub const RATE_LIMITED_MESSAGE: &str =
    "Limite de requisições excedido. Tente novamente em alguns instantes.";
pub const NO_CREDITS_MESSAGE: &str = "Créditos insuficientes. Adicione fundos ao seu workspace de IA.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    PaymentRequired(String),
    #[error("{0}")]
    TooManyRequests(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::PaymentRequired(_) => (StatusCode::PAYMENT_REQUIRED, "E_PAYMENT_REQUIRED"),
            ApiError::TooManyRequests(_) => (StatusCode::TOO_MANY_REQUESTS, "E_RATE_LIMITED"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            CoreError::Forbidden => ApiError::Forbidden("Forbidden".to_string()),
            CoreError::TableMissing(table) => {
                ApiError::ServiceUnavailable(format!("Table {} is not available", table))
            }
            CoreError::AiRateLimited => ApiError::TooManyRequests(RATE_LIMITED_MESSAGE.to_string()),
            CoreError::AiInsufficientCredits => {
                ApiError::PaymentRequired(NO_CREDITS_MESSAGE.to_string())
            }
            CoreError::AiUpstream(status) => {
                ApiError::InternalServerError(format!("Erro da API: {}", status))
            }
            CoreError::AiNotConfigured => {
                ApiError::InternalServerError("AI gateway API key is not configured".to_string())
            }
            CoreError::InvalidAiResponse(message) => ApiError::InternalServerError(message),
            CoreError::ExternalServiceError(message) => {
                error!("External service error: {}", message);
                ApiError::InternalServerError("External service error".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// `Json` that also runs the payload's `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_errors_keep_user_facing_messages() {
        assert_eq!(
            ApiError::from(CoreError::AiRateLimited),
            ApiError::TooManyRequests(RATE_LIMITED_MESSAGE.to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::AiInsufficientCredits),
            ApiError::PaymentRequired(NO_CREDITS_MESSAGE.to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::AiUpstream(503)),
            ApiError::InternalServerError("Erro da API: 503".to_string())
        );
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Invalid("x".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::Conflict("x".to_string()), StatusCode::CONFLICT),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::TableMissing("profiles".to_string()), StatusCode::SERVICE_UNAVAILABLE),
            (CoreError::AiRateLimited, StatusCode::TOO_MANY_REQUESTS),
            (CoreError::AiInsufficientCredits, StatusCode::PAYMENT_REQUIRED),
            (CoreError::AiNotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
