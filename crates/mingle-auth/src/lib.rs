//! # mingle-auth
//!
//! Dual-token authentication lifecycle for Mingle: stateless JWT issuance
//! and verification, Argon2id password hashing, and the session lifecycle
//! controller (login, silent refresh, logout, password reset).
//!
//! ## Modules
//!
//! - `jwt` — token creation and validation with distinct access/refresh secrets
//! - `password` — Argon2id password hashing and verification
//! - `session` — session lifecycle controller and the refresh cookie contract
//! - `store` — in-memory credential store for tests and small deployments

pub mod jwt;
pub mod password;
pub mod session;
pub mod store;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
pub use session::{RefreshCookie, SessionManager};
pub use store::MemoryCredentialStore;
