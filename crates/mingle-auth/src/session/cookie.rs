//! The refresh token cookie contract.
//!
//! The refresh token travels only inside a scoped secure-channel cookie:
//! `httpOnly` (not script-accessible), `Secure` (HTTPS only), and
//! `SameSite=None` (cross-site capable). The HTTP layer above this core
//! turns [`RefreshCookie`] into an actual `Set-Cookie` header.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the refresh token cookie.
pub const REFRESH_COOKIE_NAME: &str = "jwt";

/// A refresh cookie directive: either set a token or clear the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshCookie {
    /// Cookie value — the signed refresh token, or empty when clearing.
    pub value: String,
    /// Cookie lifetime. `None` means the cookie is being cleared.
    pub max_age: Option<Duration>,
}

impl RefreshCookie {
    /// Directive that sets the refresh token with the given lifetime.
    pub fn set(token: impl Into<String>, max_age: Duration) -> Self {
        Self {
            value: token.into(),
            max_age: Some(max_age),
        }
    }

    /// Directive that clears the cookie (logout).
    pub fn clear() -> Self {
        Self {
            value: String::new(),
            max_age: None,
        }
    }

    /// Whether this directive clears the cookie rather than setting it.
    pub fn is_clearing(&self) -> bool {
        self.max_age.is_none()
    }

    /// Renders the full `Set-Cookie` header value.
    pub fn to_set_cookie_header(&self) -> String {
        match self.max_age {
            Some(max_age) => format!(
                "{}={}; Max-Age={}; Path=/; HttpOnly; Secure; SameSite=None",
                REFRESH_COOKIE_NAME,
                self.value,
                max_age.as_secs()
            ),
            None => format!(
                "{}=; Max-Age=0; Path=/; HttpOnly; Secure; SameSite=None",
                REFRESH_COOKIE_NAME
            ),
        }
    }
}
