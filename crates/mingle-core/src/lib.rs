//! # mingle-core
//!
//! Core crate for the Mingle session-and-presence subsystem. Contains the
//! unified error system, configuration schemas, typed identifiers, domain
//! events, logging setup, and the traits behind which external collaborators
//! (credential storage, outbound mail) sit.
//!
//! This crate has **no** internal dependencies on other Mingle crates.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
