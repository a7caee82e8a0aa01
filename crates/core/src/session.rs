//! Session context: the registry of signed-in identities.
//!
//! [`SessionContext`] is the only shared mutable state in the application. It
//! is written exclusively by the sign-in / sign-out flow; every other
//! component reads it. Changes fan out to subscribers over a
//! `tokio::sync::broadcast` channel, sent while the write lock is held so
//! subscribers observe changes in the order they were applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};
use ts_rs::TS;
use uuid::Uuid;

use crate::roles::UserRole;
use crate::types::{DbId, Timestamp};

/// A signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    /// Unique per sign-in; embedded in the access token as `sid`.
    pub session_id: Uuid,
    pub user_id: DbId,
    pub email: String,
    /// `None` when the user has no role assigned yet.
    pub role: Option<UserRole>,
    pub signed_in_at: Timestamp,
    /// When the session's access token expires. The session is dropped
    /// from the context after this point.
    pub expires_at: Timestamp,
}

impl Session {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// A change to the set of active sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionChange {
    SignedIn { session: Session },
    SignedOut { session_id: Uuid, user_id: DbId },
}

impl SessionChange {
    /// The user the change concerns.
    pub fn user_id(&self) -> DbId {
        match self {
            SessionChange::SignedIn { session } => session.user_id,
            SessionChange::SignedOut { user_id, .. } => *user_id,
        }
    }
}

/// Default buffer capacity for the change channel.
const DEFAULT_CAPACITY: usize = 256;

/// Registry of active sessions with subscribe/notify semantics.
///
/// Designed to be wrapped in `Arc` and shared through application state.
pub struct SessionContext {
    sessions: RwLock<HashMap<Uuid, Session>>,
    changes: broadcast::Sender<SessionChange>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self {
            sessions: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Register a new session and notify subscribers.
    ///
    /// Expired sessions are swept out on every sign-in.
    pub async fn sign_in(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        let now = chrono::Utc::now();
        sessions.retain(|_, s| !s.is_expired_at(now));
        sessions.insert(session.session_id, session.clone());
        // A send error only means nobody is subscribed.
        let _ = self.changes.send(SessionChange::SignedIn { session });
    }

    /// Remove a session and notify subscribers.
    ///
    /// Returns the removed session, or `None` if it was not active.
    pub async fn sign_out(&self, session_id: Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(&session_id)?;
        let _ = self.changes.send(SessionChange::SignedOut {
            session_id,
            user_id: removed.user_id,
        });
        Some(removed)
    }

    /// The session with the given id, if it is still active.
    ///
    /// An expired session is removed and reported as absent. Expiry does not
    /// notify subscribers.
    pub async fn current(&self, session_id: Uuid) -> Option<Session> {
        let now = chrono::Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&session_id) {
                None => return None,
                Some(s) if !s.is_expired_at(now) => return Some(s.clone()),
                Some(_) => {}
            }
        }
        let mut sessions = self.sessions.write().await;
        if sessions
            .get(&session_id)
            .is_some_and(|s| s.is_expired_at(now))
        {
            sessions.remove(&session_id);
        }
        None
    }

    /// Number of unexpired sessions. Expired ones are pruned as a side effect.
    pub async fn active_count(&self) -> usize {
        self.prune_expired().await;
        self.sessions.read().await.len()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = chrono::Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        before - sessions.len()
    }

    /// Subscribe to session changes. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.changes.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of a [`SessionContext`] subscription.
pub struct SessionSubscription {
    receiver: broadcast::Receiver<SessionChange>,
}

impl SessionSubscription {
    /// Wait for the next change.
    ///
    /// Returns `None` once the context has been dropped. A lagging subscriber
    /// skips the changes it missed rather than failing.
    pub async fn next(&mut self) -> Option<SessionChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
