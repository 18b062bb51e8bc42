//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// Access and refresh tokens are signed with **distinct** secrets so that
/// a leaked access-signing secret cannot be replayed to mint refresh
/// tokens, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_token_secret: String,
    /// Access token TTL in days.
    #[serde(default = "default_token_ttl_days")]
    pub access_ttl_days: u64,
    /// Refresh token TTL in days. Also the refresh cookie lifetime.
    #[serde(default = "default_token_ttl_days")]
    pub refresh_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: default_access_secret(),
            refresh_token_secret: default_refresh_secret(),
            access_ttl_days: default_token_ttl_days(),
            refresh_ttl_days: default_token_ttl_days(),
        }
    }
}

fn default_access_secret() -> String {
    "CHANGE_ME_ACCESS_SECRET".to_string()
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_REFRESH_SECRET".to_string()
}

fn default_token_ttl_days() -> u64 {
    7
}
