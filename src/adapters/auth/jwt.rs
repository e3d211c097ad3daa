//! HS256 JWT adapter for session validation.
//!
//! Validates bearer tokens signed with a shared secret and maps their
//! claims onto `AuthenticatedUser`:
//!
//! | Claim      | Field                         |
//! |------------|-------------------------------|
//! | `sub`      | `id` (required, non-empty)    |
//! | `email`    | `email`                       |
//! | `name`     | `display_name`                |
//! | `is_staff` | `is_staff` (defaults to false)|
//! | `exp`      | required, must be in the future |
//!
//! `iss` and `aud` are checked only when configured.
//!
//! # Example
//!
//! ```ignore
//! let validator = JwtSessionValidator::new(&config.auth.jwt_secret)
//!     .with_issuer("https://auth.example.com")
//!     .with_audience("polls-api");
//!
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by an access token. `exp`, `iss` and `aud` are checked
/// by `Validation` and not needed afterwards.
#[derive(Debug, Deserialize)]
struct PollClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_staff: bool,
}

/// Shared-secret JWT session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Create a validator for HS256 tokens signed with `secret`.
    pub fn new(secret: &SecretString) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Require the `iss` claim to match.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        self.validation.set_issuer(&[issuer.as_str()]);
        self
    }

    /// Require the `aud` claim to contain `audience`.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        let audience = audience.into();
        self.validation.set_audience(&[audience.as_str()]);
        self.validation.validate_aud = true;
        self
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<PollClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!(error = %e, "Token issued for another party");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!(error = %e, "Token validation failed");
                    AuthError::InvalidToken
                }
            },
        )?;

        let claims = data.claims;
        let id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token has an empty subject");
            AuthError::InvalidToken
        })?;

        let user = AuthenticatedUser::new(id, claims.email, claims.name);
        Ok(if claims.is_staff { user.staff() } else { user })
    }
}
