//! Session state
//!
//! An explicit, injectable session store with a publish/subscribe surface.
//! The application root owns one and hands clones to whoever needs the
//! current user: the HTTP adapters read the bearer token from it, views can
//! subscribe to login/logout transitions. Dropping a receiver releases its
//! subscription; there is no process-wide singleton.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::domain::entities::Role;

/// An authenticated session, as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires: DateTime<Utc>,
    pub email: String,
    pub role: Role,
}

/// Shared current-session state
///
/// Cheap to clone; all clones observe the same session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// The current session, if logged in
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Install a session (login)
    pub fn set(&self, session: Session) {
        self.tx.send_replace(Some(session));
    }

    /// Drop the session (logout, or a 401 from the server)
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Subscribe to session transitions
    ///
    /// The subscription lasts exactly as long as the returned receiver.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    /// Bearer token for outgoing requests, if logged in
    pub fn bearer_token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn is_owner(&self) -> bool {
        matches!(self.tx.borrow().as_ref(), Some(s) if s.role == Role::Owner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_session;

    #[test]
    fn starts_logged_out() {
        let store = SessionStore::new();
        assert!(store.current().is_none());
        assert!(store.bearer_token().is_none());
        assert!(!store.is_owner());
    }

    #[test]
    fn set_and_clear() {
        let store = SessionStore::new();
        store.set(test_session(Role::Owner));

        assert_eq!(store.bearer_token().as_deref(), Some("test-token"));
        assert!(store.is_owner());

        store.clear();
        assert!(store.current().is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();

        store.set(test_session(Role::Regular));
        assert_eq!(other.bearer_token().as_deref(), Some("test-token"));
        assert!(!other.is_owner());
    }

    #[tokio::test]
    async fn subscribers_observe_transitions() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.set(test_session(Role::Regular));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_some());

        store.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }
}
