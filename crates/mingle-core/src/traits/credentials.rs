//! Credential store trait for account lookup and password updates.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// Opaque lookup/update capability over user credential records.
///
/// The trait is generic over the record type so that this crate does not
/// depend on the entity crate. The record holds a salted password digest;
/// the digest is never reversible to plaintext and comparison happens via
/// a one-way verification function, never here.
#[async_trait]
pub trait CredentialStore<Record>: Send + Sync + 'static
where
    Record: Send + Sync + 'static,
{
    /// Find a credential record by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Record>>;

    /// Find a credential record by user ID.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<Record>>;

    /// Replace the stored password digest for a user.
    ///
    /// Implementations must provide atomic read-modify-write semantics.
    async fn update_password_digest(&self, id: &UserId, digest: &str) -> AppResult<()>;
}
