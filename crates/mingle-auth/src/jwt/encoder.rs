//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use mingle_core::config::auth::AuthConfig;
use mingle_core::error::AppError;
use mingle_core::types::id::UserId;

use super::claims::Claims;

/// Creates signed JWT access and refresh tokens.
///
/// The two token kinds are signed with distinct secrets so that a leaked
/// access-signing secret cannot be replayed to mint refresh tokens, and
/// vice versa.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for access token signing.
    access_key: EncodingKey,
    /// HMAC secret key for refresh token signing.
    refresh_key: EncodingKey,
    /// Access token TTL in days.
    access_ttl_days: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_days", &self.access_ttl_days)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// A freshly minted token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignedToken {
    /// The encoded, signed token string.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl_days: config.access_ttl_days as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        }
    }

    /// Generates a new access token for the given user.
    pub fn issue_access_token(&self, user_id: UserId) -> Result<SignedToken, AppError> {
        self.issue(user_id, &self.access_key, self.access_ttl_days)
    }

    /// Generates a new refresh token for the given user.
    pub fn issue_refresh_token(&self, user_id: UserId) -> Result<SignedToken, AppError> {
        self.issue(user_id, &self.refresh_key, self.refresh_ttl_days)
    }

    fn issue(&self, user_id: UserId, key: &EncodingKey, ttl_days: i64) -> Result<SignedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(ttl_days);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: uuid::Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(SignedToken { token, expires_at })
    }
}
