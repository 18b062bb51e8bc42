//! Point-to-point notification events.

use serde::{Deserialize, Serialize};

use crate::types::id::{PostId, UserId};

/// A notification trigger emitted by the CRUD layer.
///
/// "User X did something relevant to user Y" — the actor fields describe
/// X; the target user is supplied separately to the router at delivery
/// time and is not part of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// The user who performed the action.
    pub actor_id: UserId,
    /// Display name of the acting user.
    pub actor_name: String,
    /// The post the action refers to.
    pub post_id: PostId,
}

impl NotificationEvent {
    /// Create a new notification event.
    pub fn new(actor_id: UserId, actor_name: impl Into<String>, post_id: PostId) -> Self {
        Self {
            actor_id,
            actor_name: actor_name.into(),
            post_id,
        }
    }
}
