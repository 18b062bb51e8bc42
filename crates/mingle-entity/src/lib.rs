//! # mingle-entity
//!
//! Domain entity models for Mingle. Every struct in this crate represents
//! a persisted record or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`. Persistence itself
//! lives behind the collaborator traits in `mingle-core`.

pub mod user;

pub use user::User;
