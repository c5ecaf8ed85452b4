use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use clap::ValueEnum;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum AuthMode {
    ApiKey,
    Jwt,
}

/// Credential material for the selected [`AuthMode`]. Checked once at
/// startup via [`AuthConfig::validate`], then consulted per request.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub api_key: Option<String>,
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    /// The selected mode must come with its key material; a service that
    /// would reject every request is a configuration error.
    pub fn validate(&self) -> Result<(), ApiError> {
        match self.mode {
            AuthMode::ApiKey if self.api_key.is_none() => Err(ApiError::BadRequest(
                "HYLIOS_API_KEY is required when AUTH_MODE=api_key".into(),
            )),
            AuthMode::Jwt if self.jwt_secret.is_none() => Err(ApiError::BadRequest(
                "JWT_SECRET is required when AUTH_MODE=jwt".into(),
            )),
            _ => Ok(()),
        }
    }

    fn authenticate(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        match self.mode {
            AuthMode::ApiKey => self.check_api_key(parts),
            AuthMode::Jwt => self.check_bearer_token(parts),
        }
    }

    fn check_api_key(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        let expected = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("API key auth not configured".into()))?;

        match header_str(parts, "x-api-key") {
            Some(provided) if provided == expected => Ok(AuthUser {
                subject: "api_key".into(),
            }),
            Some(_) => Err(ApiError::Unauthorized("invalid API key".into())),
            None => Err(ApiError::Unauthorized("missing X-API-Key header".into())),
        }
    }

    fn check_bearer_token(&self, parts: &Parts) -> Result<AuthUser, ApiError> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("JWT auth not configured".into()))?;

        let token = header_str(parts, AUTHORIZATION.as_str())
            .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".into()))?
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("expected Bearer token".into()))?;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|err| ApiError::Unauthorized(format!("invalid token: {err}")))?;

        Ok(AuthUser {
            subject: data.claims.sub,
        })
    }
}

/// Authenticated caller. Only the subject is carried; expiry is enforced by
/// the decoder against the raw token, not re-read here.
#[derive(Debug, Clone)]
pub struct AuthUser {
    #[allow(dead_code)]
    pub subject: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AuthConfig::from_ref(state).authenticate(parts)
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    // 2100-01-01, far enough out for the decoder's expiry check.
    const FAR_FUTURE: usize = 4_102_444_800;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn parts_with_header(name: &str, value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/match");
        if let Some(value) = value {
            builder = builder.header(name, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn api_key_config(key: &str) -> AuthConfig {
        AuthConfig {
            mode: AuthMode::ApiKey,
            api_key: Some(key.into()),
            jwt_secret: None,
        }
    }

    fn jwt_config(secret: &str) -> AuthConfig {
        AuthConfig {
            mode: AuthMode::Jwt,
            api_key: None,
            jwt_secret: Some(secret.into()),
        }
    }

    fn signed_token(secret: &str, sub: &str, exp: usize) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TestClaims {
                sub: sub.into(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_matching_api_key() {
        let parts = parts_with_header("x-api-key", Some("secret"));
        let user = api_key_config("secret").authenticate(&parts).unwrap();
        assert_eq!(user.subject, "api_key");
    }

    #[test]
    fn rejects_wrong_or_missing_api_key() {
        let config = api_key_config("secret");

        let wrong = parts_with_header("x-api-key", Some("nope"));
        assert!(matches!(
            config.authenticate(&wrong),
            Err(ApiError::Unauthorized(_))
        ));

        let missing = parts_with_header("x-api-key", None);
        assert!(matches!(
            config.authenticate(&missing),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn accepts_token_signed_with_shared_secret() {
        let token = signed_token("shared-secret", "professional-42", FAR_FUTURE);
        let parts = parts_with_header("authorization", Some(&format!("Bearer {token}")));

        let user = jwt_config("shared-secret").authenticate(&parts).unwrap();
        assert_eq!(user.subject, "professional-42");
    }

    #[test]
    fn rejects_expired_or_foreign_tokens() {
        let config = jwt_config("shared-secret");

        let expired = signed_token("shared-secret", "professional-42", 1_000_000);
        let parts = parts_with_header("authorization", Some(&format!("Bearer {expired}")));
        assert!(matches!(
            config.authenticate(&parts),
            Err(ApiError::Unauthorized(_))
        ));

        let foreign = signed_token("other-secret", "professional-42", FAR_FUTURE);
        let parts = parts_with_header("authorization", Some(&format!("Bearer {foreign}")));
        assert!(matches!(
            config.authenticate(&parts),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_malformed_bearer_header() {
        let parts = parts_with_header("authorization", Some("Token abc"));
        assert!(matches!(
            jwt_config("secret").authenticate(&parts),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn validate_requires_key_material_for_the_selected_mode() {
        assert!(api_key_config("secret").validate().is_ok());
        assert!(jwt_config("secret").validate().is_ok());

        let keyless = AuthConfig {
            mode: AuthMode::ApiKey,
            api_key: None,
            jwt_secret: None,
        };
        assert!(matches!(
            keyless.validate(),
            Err(ApiError::BadRequest(_))
        ));

        let secretless = AuthConfig {
            mode: AuthMode::Jwt,
            api_key: None,
            jwt_secret: None,
        };
        assert!(matches!(
            secretless.validate(),
            Err(ApiError::BadRequest(_))
        ));
    }
}
