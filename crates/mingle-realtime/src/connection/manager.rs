//! Connection manager — consumes the transport's lifecycle events.
//!
//! The transport layer (excluded from this core) calls `connect` when a
//! socket opens, `identify` once the client has announced who it is, and
//! `disconnect` when the socket drops. A connection that drops before
//! identifying simply never enters the registry; `disconnect` is
//! idempotent and safe to run regardless of how far the lifecycle got.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use mingle_core::config::realtime::RealtimeConfig;
use mingle_core::types::id::{ConnectionId, UserId};

use crate::message::OutboundMessage;
use crate::presence::registry::PresenceRegistry;

use super::handle::ConnectionHandle;

/// Manages connection lifecycles against the presence registry.
#[derive(Debug)]
pub struct ConnectionManager {
    /// The injected presence registry.
    registry: Arc<PresenceRegistry>,
    /// Configuration.
    config: RealtimeConfig,
}

impl ConnectionManager {
    /// Creates a new connection manager over the given registry.
    pub fn new(registry: Arc<PresenceRegistry>, config: RealtimeConfig) -> Self {
        Self { registry, config }
    }

    /// Handles a new socket connection.
    ///
    /// Returns the handle plus the receiver the transport drains into the
    /// actual socket. The connection is not yet present in the registry;
    /// that happens on `identify`.
    pub fn connect(&self) -> (Arc<ConnectionHandle>, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size);
        let handle = Arc::new(ConnectionHandle::new(tx));

        debug!(conn_id = %handle.id, "Connection opened");

        (handle, rx)
    }

    /// Binds a connection to a user identity after the handshake.
    ///
    /// Returns `true` if the connection was registered; `false` when the
    /// user already holds a registered connection (idempotent add).
    pub fn identify(&self, handle: &Arc<ConnectionHandle>, user_id: UserId) -> bool {
        let registered = self.registry.register(user_id, handle.clone());

        if registered {
            info!(conn_id = %handle.id, user_id = %user_id, "User online");
        } else {
            debug!(
                conn_id = %handle.id,
                user_id = %user_id,
                "User already registered, identify ignored"
            );
        }

        registered
    }

    /// Handles a dropped socket. Idempotent.
    pub fn disconnect(&self, conn_id: &ConnectionId) {
        if let Some(user_id) = self.registry.unregister(conn_id) {
            info!(conn_id = %conn_id, user_id = %user_id, "User offline");
        } else {
            debug!(conn_id = %conn_id, "Disconnect for unregistered connection");
        }
    }
}
