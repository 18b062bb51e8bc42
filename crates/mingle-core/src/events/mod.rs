//! Domain events emitted by the application layers above this core.
//!
//! Events are handed to the notification router, which consults the
//! presence registry and pushes to the target user's connection if the
//! user is currently online.

pub mod notification;

pub use notification::NotificationEvent;
