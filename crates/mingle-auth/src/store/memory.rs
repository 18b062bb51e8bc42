//! In-memory credential store.
//!
//! Backs tests and single-process deployments. A production deployment
//! plugs a database-backed implementation of [`CredentialStore`] in
//! instead.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use mingle_core::error::AppError;
use mingle_core::result::AppResult;
use mingle_core::traits::credentials::CredentialStore;
use mingle_core::types::id::UserId;
use mingle_entity::user::{CreateUser, User};

/// DashMap-backed credential store with a secondary email index.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    /// User ID → record.
    by_id: DashMap<UserId, User>,
    /// Email → user ID.
    by_email: DashMap<String, UserId>,
}

impl MemoryCredentialStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user record.
    ///
    /// Fails if the email is already taken. The email index entry is the
    /// atomic claim, so two concurrent inserts of the same email cannot
    /// both succeed.
    pub fn insert(&self, create: CreateUser) -> AppResult<User> {
        let user = User::from(create);
        match self.by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::validation(format!(
                "Email already registered: {}",
                user.email
            ))),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.by_id.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    /// Removes a user record. Returns the removed record if present.
    ///
    /// Account deletion itself belongs to the external CRUD layer; this
    /// mirrors it so refresh-after-deletion behavior can be exercised.
    pub fn remove(&self, id: &UserId) -> Option<User> {
        let (_, user) = self.by_id.remove(id)?;
        self.by_email.remove(&user.email);
        Some(user)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl CredentialStore<User> for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let id = match self.by_email.get(email) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.by_id.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.by_id.get(id).map(|entry| entry.value().clone()))
    }

    async fn update_password_digest(&self, id: &UserId, digest: &str) -> AppResult<()> {
        let mut entry = self
            .by_id
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("No user with ID {id}")))?;
        entry.password_hash = digest.to_string();
        entry.updated_at = Utc::now();
        Ok(())
    }
}
