use std::sync::Arc;

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::debug;
use weekfit_core::{
    domain::authentication::{ports::TokenVerifier, value_objects::Identity},
    infrastructure::auth::HostedJwtVerifier,
};

use super::http::server::api_entities::api_error::ApiError;

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    Some(bearer.token().to_string())
}

/// Verifies the bearer token when one is sent and stores the caller's
/// [`Identity`] in the request extensions. Requests without a valid token go
/// through untouched; handlers that need a caller use [`RequiredIdentity`].
pub async fn auth(
    State(verifier): State<Arc<HostedJwtVerifier>>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Some(token) = extract_token_from_bearer(&mut parts).await {
        match verifier.verify(&token) {
            Ok(identity) => {
                parts.extensions.insert(identity);
            }
            Err(e) => debug!("Ignoring bearer token: {}", e),
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide a valid Authorization header".to_string(),
                )
            })
    }
}
