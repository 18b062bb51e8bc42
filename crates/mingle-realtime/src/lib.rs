//! # mingle-realtime
//!
//! Live presence registry and best-effort notification routing for Mingle.
//!
//! A client that has authenticated opens a persistent connection, which the
//! transport layer reports here via connect/identify/disconnect events.
//! Application events targeting a user are handed to the
//! [`NotificationRouter`], which consults the [`PresenceRegistry`] and
//! pushes to the target's connection if the target is currently online —
//! and silently drops the event otherwise. Delivery is at-most-once with
//! no queueing and no durable mailbox.
//!
//! ## Modules
//!
//! - `connection` — per-connection handles and the lifecycle manager
//! - `presence` — the identity → connection registry
//! - `message` — outbound wire message types
//! - `notification` — the fire-and-forget router

pub mod connection;
pub mod message;
pub mod notification;
pub mod presence;

pub use connection::{ConnectionHandle, ConnectionManager};
pub use message::OutboundMessage;
pub use notification::NotificationRouter;
pub use presence::PresenceRegistry;
