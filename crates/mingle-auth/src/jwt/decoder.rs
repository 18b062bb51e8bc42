//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use mingle_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Why a presented token was rejected.
///
/// The session controller collapses both variants into the boundary
/// taxonomy (`Forbidden` on refresh, `Unauthenticated` on access checks),
/// but the distinction is preserved here for logs and tests.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry has elapsed. The signature may well be valid.
    #[error("token has expired")]
    Expired,
    /// Bad signature, malformed structure, or any other validation failure.
    #[error("token is invalid: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Validates JWT tokens against the access or refresh secret.
///
/// Verification never touches I/O; it is a pure function of the token
/// string and the signing secret, safe to call from any task without
/// locking.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for access token verification.
    access_key: DecodingKey,
    /// HMAC secret key for refresh token verification.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_with(token, &self.access_key)
    }

    /// Decodes and validates a refresh token string.
    ///
    /// A token signed with the access secret fails here with
    /// [`TokenError::Invalid`] even when it is otherwise well-formed.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_with(token, &self.refresh_key)
    }

    fn decode_with(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            }
        })?;

        Ok(token_data.claims)
    }
}
