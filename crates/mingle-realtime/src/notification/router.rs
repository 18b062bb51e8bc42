//! Notification router — delivers events to online targets only.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use mingle_core::events::notification::NotificationEvent;
use mingle_core::types::id::UserId;

use crate::message::OutboundMessage;
use crate::presence::registry::PresenceRegistry;

/// Routes point-to-point events through the presence registry.
///
/// Delivery is at-most-once and best-effort: an offline target, a full
/// send buffer, or a dying connection all result in a silent drop. There
/// is no retry and no durable mailbox. A delivery racing a registration
/// for the same user may legitimately miss; no ordering is guaranteed
/// between the two.
#[derive(Debug, Clone)]
pub struct NotificationRouter {
    /// The injected presence registry.
    registry: Arc<PresenceRegistry>,
}

impl NotificationRouter {
    /// Creates a new router over the given registry.
    pub fn new(registry: Arc<PresenceRegistry>) -> Self {
        Self { registry }
    }

    /// Delivers an event to the target user if they are online.
    ///
    /// Returns `true` if the event entered the target's channel. An
    /// absent target is a defined no-op, never an error.
    pub fn deliver(&self, event: &NotificationEvent, target: &UserId) -> bool {
        let handle = match self.registry.lookup(target) {
            Some(handle) => handle,
            None => {
                debug!(target = %target, "Target offline, notification dropped");
                return false;
            }
        };

        let msg = OutboundMessage::Notification {
            actor_id: event.actor_id,
            actor_name: event.actor_name.clone(),
            post_id: event.post_id,
            timestamp: Utc::now(),
        };

        let sent = handle.send(msg);
        if sent {
            debug!(target = %target, conn_id = %handle.id, "Notification delivered");
        } else {
            debug!(target = %target, conn_id = %handle.id, "Notification dropped on send");
        }
        sent
    }
}
