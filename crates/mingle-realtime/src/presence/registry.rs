//! Presence registry — the identity → connection table.
//!
//! The registry is the only shared mutable resource in the presence
//! subsystem. It is an explicitly owned object injected into the
//! connection manager and the router, never a module-level singleton.
//!
//! Semantics are first-connection-wins: a second connect for an
//! already-present identity is a no-op while the first connection stays
//! registered. Removal matches on the connection handle, not the
//! identity, so one device disconnecting cannot evict another device's
//! entry for the same user.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use mingle_core::types::id::{ConnectionId, UserId};

use crate::connection::handle::ConnectionHandle;

/// Thread-safe registry of online users.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    /// User ID → the registered connection handle.
    entries: DashMap<UserId, Arc<ConnectionHandle>>,
}

impl PresenceRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection for a user.
    ///
    /// Idempotent add: if the user is already registered — even from a
    /// different connection — nothing changes and `false` is returned.
    pub fn register(&self, user_id: UserId, handle: Arc<ConnectionHandle>) -> bool {
        match self.entries.entry(user_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Looks up the registered connection for a user.
    pub fn lookup(&self, user_id: &UserId) -> Option<Arc<ConnectionHandle>> {
        self.entries.get(user_id).map(|entry| entry.value().clone())
    }

    /// Removes the entry owned by the given connection, if any.
    ///
    /// Matches on connection handle, not identity. No-op when the
    /// connection never registered (or already unregistered), which makes
    /// disconnect handling safe to run in any order.
    pub fn unregister(&self, conn_id: &ConnectionId) -> Option<UserId> {
        let user_id = self
            .entries
            .iter()
            .find(|entry| entry.value().id == *conn_id)
            .map(|entry| *entry.key())?;

        // The entry may have been swapped between the scan and here;
        // remove only if it still belongs to this connection.
        self.entries
            .remove_if(&user_id, |_, handle| handle.id == *conn_id)
            .map(|(removed_user, _)| removed_user)
    }

    /// Checks if a user currently holds a registered connection.
    pub fn is_online(&self, user_id: &UserId) -> bool {
        self.entries.contains_key(user_id)
    }

    /// Number of online users.
    pub fn online_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn make_handle() -> Arc<ConnectionHandle> {
        let (tx, _rx) = mpsc::channel(4);
        // Receiver is dropped; these tests never send.
        Arc::new(ConnectionHandle::new(tx))
    }

    #[test]
    fn register_then_lookup_then_unregister() {
        let registry = PresenceRegistry::new();
        let user = UserId::new();
        let handle = make_handle();

        assert!(registry.register(user, handle.clone()));
        assert_eq!(registry.lookup(&user).unwrap().id, handle.id);
        assert!(registry.is_online(&user));

        assert_eq!(registry.unregister(&handle.id), Some(user));
        assert!(registry.lookup(&user).is_none());
        assert!(!registry.is_online(&user));
    }

    #[test]
    fn second_connection_for_same_user_is_a_no_op() {
        let registry = PresenceRegistry::new();
        let user = UserId::new();
        let first = make_handle();
        let second = make_handle();

        assert!(registry.register(user, first.clone()));
        assert!(!registry.register(user, second.clone()));

        // First connection wins, not last write.
        assert_eq!(registry.lookup(&user).unwrap().id, first.id);
        assert_eq!(registry.online_count(), 1);
    }

    #[test]
    fn unregister_of_unknown_connection_is_a_no_op() {
        let registry = PresenceRegistry::new();
        let user = UserId::new();
        let registered = make_handle();
        let never_registered = make_handle();

        registry.register(user, registered);
        assert_eq!(registry.unregister(&never_registered.id), None);
        assert!(registry.is_online(&user));
    }

    #[test]
    fn losing_connection_disconnect_does_not_evict_the_winner() {
        let registry = PresenceRegistry::new();
        let user = UserId::new();
        let winner = make_handle();
        let loser = make_handle();

        registry.register(user, winner.clone());
        registry.register(user, loser.clone());

        // The loser was never registered, so its disconnect changes nothing.
        assert_eq!(registry.unregister(&loser.id), None);
        assert_eq!(registry.lookup(&user).unwrap().id, winner.id);
    }

    #[tokio::test]
    async fn concurrent_registration_admits_exactly_one_connection() {
        let registry = Arc::new(PresenceRegistry::new());
        let user = UserId::new();

        let mut tasks = Vec::new();
        for _ in 0..32 {
            let registry = registry.clone();
            tasks.push(tokio::spawn(async move {
                registry.register(user, make_handle())
            }));
        }

        let mut admitted = 0;
        for task in tasks {
            if task.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(registry.online_count(), 1);
    }
}
