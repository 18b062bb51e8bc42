//! Session lifecycle controller and the refresh cookie contract.
//!
//! There is no server-side session state. The per-client state machine
//! (`Anonymous -> Authenticated -> Refreshing -> Authenticated | LoggedOut`)
//! is reconstructed on every request from the presented tokens.

pub mod cookie;
pub mod manager;

pub use cookie::RefreshCookie;
pub use manager::{LoginOutcome, LogoutOutcome, RefreshOutcome, ResetOutcome, SessionManager};
