//! Messages pushed to connected clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mingle_core::types::id::{PostId, UserId};

/// Messages sent by the server to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Point-to-point notification delivery.
    Notification {
        /// The user who performed the action.
        actor_id: UserId,
        /// Display name of the acting user.
        actor_name: String,
        /// The post the action refers to.
        post_id: PostId,
        /// When the notification was routed.
        timestamp: DateTime<Utc>,
    },
}
