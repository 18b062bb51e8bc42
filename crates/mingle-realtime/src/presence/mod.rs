//! Presence — which user identities currently hold a live connection.

pub mod registry;

pub use registry::PresenceRegistry;
