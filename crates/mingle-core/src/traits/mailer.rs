//! Outbound mail trait for the password reset flow.

use async_trait::async_trait;

use crate::result::AppResult;

/// Out-of-band notification collaborator (email gateway).
#[async_trait]
pub trait ResetMailer: Send + Sync + 'static {
    /// Notify a user that their password has been reset.
    async fn send_password_reset(&self, first_name: &str, email: &str) -> AppResult<()>;
}
