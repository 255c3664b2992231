use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    authentication::{entities::HostedClaims, ports::TokenVerifier, value_objects::Identity},
    common::{AuthConfig, entities::app_errors::CoreError},
};

/// Verifies HS256 access tokens signed with the hosted provider's JWT secret.
#[derive(Clone)]
pub struct HostedJwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl HostedJwtVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for HostedJwtVerifier {
    fn verify(&self, token: &str) -> Result<Identity, CoreError> {
        let data = decode::<HostedClaims>(token, &self.key, &self.validation).map_err(|e| {
            warn!("Rejected access token: {}", e);
            CoreError::InvalidToken
        })?;

        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| {
            warn!("Access token subject is not a user id");
            CoreError::InvalidToken
        })?;

        Ok(Identity::new(user_id, data.claims.email))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    fn config(audience: Option<&str>) -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            audience: audience.map(str::to_string),
        }
    }

    fn token(sub: &str, secret: &str, aud: Option<&str>, exp_offset: i64) -> String {
        let exp = (Utc::now().timestamp() + exp_offset) as usize;
        let mut claims = serde_json::json!({
            "sub": sub,
            "email": "ana@example.com",
            "role": "authenticated",
            "exp": exp,
        });
        if let Some(aud) = aud {
            claims["aud"] = aud.into();
        }
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let user_id = Uuid::new_v4();
        let verifier = HostedJwtVerifier::new(&config(Some("authenticated")));

        let identity = verifier
            .verify(&token(&user_id.to_string(), SECRET, Some("authenticated"), 3600))
            .unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_rejects_bad_tokens() {
        let verifier = HostedJwtVerifier::new(&config(None));
        let user_id = Uuid::new_v4().to_string();

        let wrong_secret = token(&user_id, "another-secret-another-secret-12345", None, 3600);
        let expired = token(&user_id, SECRET, None, -3600);
        let not_a_user = token("service-role", SECRET, None, 3600);

        for bad in [wrong_secret, expired, not_a_user, "garbage".to_string()] {
            assert_eq!(verifier.verify(&bad), Err(CoreError::InvalidToken));
        }
    }

    #[test]
    fn test_audience_is_checked_when_configured() {
        let verifier = HostedJwtVerifier::new(&config(Some("authenticated")));
        let other = token(&Uuid::new_v4().to_string(), SECRET, Some("anon"), 3600);
        assert_eq!(verifier.verify(&other), Err(CoreError::InvalidToken));
    }
}
