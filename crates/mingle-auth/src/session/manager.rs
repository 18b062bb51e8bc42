//! Session lifecycle controller — login, refresh, logout, password reset.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use validator::ValidateEmail;

use mingle_core::config::auth::AuthConfig;
use mingle_core::error::AppError;
use mingle_core::traits::credentials::CredentialStore;
use mingle_core::traits::mailer::ResetMailer;
use mingle_entity::user::User;

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

use super::cookie::RefreshCookie;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginOutcome {
    /// Human-readable confirmation message.
    pub message: String,
    /// Freshly minted access token, returned in the response body.
    pub access_token: String,
    /// Refresh token delivery directive for the transport layer.
    pub refresh_cookie: RefreshCookie,
}

/// Result of a successful silent refresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RefreshOutcome {
    /// Freshly minted access token.
    pub access_token: String,
}

/// Result of a successful logout.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogoutOutcome {
    /// Human-readable confirmation message.
    pub message: String,
    /// Cookie-clearing directive for the transport layer.
    pub clear_cookie: RefreshCookie,
}

/// Result of a successful password reset.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResetOutcome {
    /// Human-readable confirmation message.
    pub message: String,
}

/// Orchestrates the dual-token session lifecycle.
///
/// Holds no shared mutable state of its own; the credential store is the
/// only stateful collaborator and its consistency is delegated to the
/// implementation behind the trait.
#[derive(Clone)]
pub struct SessionManager {
    /// Token issuance.
    encoder: Arc<JwtEncoder>,
    /// Token verification.
    decoder: Arc<JwtDecoder>,
    /// Credential record lookup and updates.
    store: Arc<dyn CredentialStore<User>>,
    /// Out-of-band reset notifications.
    mailer: Arc<dyn ResetMailer>,
    /// Password hashing.
    hasher: PasswordHasher,
    /// Auth configuration.
    config: AuthConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        store: Arc<dyn CredentialStore<User>>,
        mailer: Arc<dyn ResetMailer>,
        config: AuthConfig,
    ) -> Self {
        Self {
            encoder: Arc::new(JwtEncoder::new(&config)),
            decoder: Arc::new(JwtDecoder::new(&config)),
            store,
            mailer,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Validate that both inputs are present
    /// 2. Validate the email is structurally well-formed
    /// 3. Look up the credential record by email
    /// 4. Verify the password against the stored digest
    /// 5. Issue both tokens; the refresh token travels only in the cookie
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email or password is required."));
        }

        if !email.validate_email() {
            return Err(AppError::validation("Enter a valid email address"));
        }

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))?;

        let password_valid = self
            .hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AppError::unauthorized("Incorrect email or password"));
        }

        let access = self.encoder.issue_access_token(user.id)?;
        let refresh = self.encoder.issue_refresh_token(user.id)?;

        info!(user_id = %user.id, "Login successful");

        Ok(LoginOutcome {
            message: "Login successfully".to_string(),
            access_token: access.token,
            refresh_cookie: RefreshCookie::set(
                refresh.token,
                Duration::from_secs(self.config.refresh_ttl_days * SECONDS_PER_DAY),
            ),
        })
    }

    /// Mints a fresh access token from a presented refresh cookie.
    ///
    /// The refresh token itself is not rotated; a valid cookie keeps
    /// working until its natural expiry.
    pub async fn refresh(&self, cookie_token: Option<&str>) -> Result<RefreshOutcome, AppError> {
        let token = cookie_token.ok_or_else(|| AppError::unauthenticated("Unauthorized user"))?;

        let claims = self.decoder.decode_refresh_token(token).map_err(|e| {
            warn!(error = %e, "Refresh token rejected");
            AppError::forbidden("Forbidden")
        })?;

        // Guard against deleted accounts: the token may outlive the user.
        let user = self
            .store
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Unauthorized"))?;

        let access = self.encoder.issue_access_token(user.id)?;

        Ok(RefreshOutcome {
            access_token: access.token,
        })
    }

    /// Invalidates the client's refresh channel by clearing the cookie.
    ///
    /// The token itself is not blacklisted: a holder of the raw string can
    /// still present it to `refresh` until natural expiry.
    pub fn logout(&self, cookie_token: Option<&str>) -> Result<LogoutOutcome, AppError> {
        if cookie_token.is_none() {
            return Err(AppError::unauthenticated("Unauthorized user"));
        }

        Ok(LogoutOutcome {
            message: "Logout successfully".to_string(),
            clear_cookie: RefreshCookie::clear(),
        })
    }

    /// Resets an account password to a new value and notifies the user
    /// out-of-band.
    ///
    /// Requires knowledge of the account email only — no proof of the old
    /// password and no reset token. A known weak point of the reference
    /// flow, preserved as-is.
    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<ResetOutcome, AppError> {
        if email.is_empty() || new_password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        if !email.validate_email() {
            return Err(AppError::validation("Enter a valid email address"));
        }

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))?;

        let digest = self.hasher.hash_password(new_password)?;
        self.store.update_password_digest(&user.id, &digest).await?;

        info!(user_id = %user.id, "Password reset");

        // Mail delivery is fire-and-forget; a gateway failure must not
        // roll back the already-persisted digest.
        if let Err(e) = self
            .mailer
            .send_password_reset(&user.first_name, &user.email)
            .await
        {
            warn!(user_id = %user.id, error = %e, "Reset mail delivery failed");
        }

        Ok(ResetOutcome {
            message: "Password has been reset".to_string(),
        })
    }
}
