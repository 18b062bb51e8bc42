//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mingle_core::types::id::UserId;

/// A registered user in the Mingle system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address, unique across accounts. The login key.
    pub email: String,
    /// Salted one-way password digest. Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Profile picture URL or path.
    pub picture_path: Option<String>,
    /// Free-form address line.
    pub address: Option<String>,
    /// Free-form occupation line.
    pub occupation: Option<String>,
    /// IDs of befriended users.
    pub friends: Vec<Uuid>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name, "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<CreateUser> for User {
    fn from(create: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: create.email,
            password_hash: create.password_hash,
            first_name: create.first_name,
            last_name: create.last_name,
            picture_path: None,
            address: None,
            occupation: None,
            friends: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
