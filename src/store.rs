//! In-memory session store.
//!
//! Sessions live only in process memory. A session idle for longer than the
//! configured TTL is treated as ended: it is dropped on next access or by
//! [`SessionStore::purge_expired`], and its flags are gone with it.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gate::AccessError;
use crate::models::{Disclaimer, SessionFlags, SessionView, Stage};

#[derive(Debug, Clone)]
struct SessionRecord {
    created_at: DateTime<Utc>,
    last_seen: Instant,
    flags: SessionFlags,
}

impl SessionRecord {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= ttl
    }
}

/// Copy of a session's state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub flags: SessionFlags,
}

impl SessionSnapshot {
    pub fn view(&self, stage: Stage) -> SessionView {
        SessionView {
            id: self.id,
            stage,
            disclaimer_accepted: self.flags.disclaimer_accepted,
            created_at: self.created_at,
            prompt: (stage == Stage::AwaitingPassword)
                .then(|| AccessError::EmptyCredential.to_string()),
            disclaimer: (stage == Stage::AwaitingDisclaimer).then(Disclaimer::standard),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<Mutex<HashMap<Uuid, SessionRecord>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create(&self) -> SessionSnapshot {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        let id = Uuid::new_v4();
        let record = SessionRecord {
            created_at: Utc::now(),
            last_seen: Instant::now(),
            flags: SessionFlags::default(),
        };
        let snapshot = SessionSnapshot {
            id,
            created_at: record.created_at,
            flags: record.flags,
        };
        sessions.insert(id, record);
        snapshot
    }

    pub fn get(&self, id: Uuid) -> Option<SessionSnapshot> {
        self.with_session(id, |_| ()).map(|(_, snapshot)| snapshot)
    }

    /// Run `f` against the session's flags and refresh its idle timer.
    ///
    /// Returns `None` if the session does not exist or has expired.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionFlags) -> T,
    ) -> Option<(T, SessionSnapshot)> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");

        if sessions.get(&id)?.is_expired(now, self.ttl) {
            sessions.remove(&id);
            tracing::debug!("Session {} expired", id);
            return None;
        }

        let record = sessions.get_mut(&id)?;
        record.last_seen = now;
        let value = f(&mut record.flags);
        Some((
            value,
            SessionSnapshot {
                id,
                created_at: record.created_at,
                flags: record.flags,
            },
        ))
    }

    /// End a session. Returns false if it was not present.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        sessions.remove(&id).is_some()
    }

    /// Drop every session idle past the TTL. Returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired(now, self.ttl));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_disclaimer_unaccepted() {
        let store = SessionStore::new(Duration::from_secs(60));
        let session = store.create();

        assert!(!session.flags.disclaimer_accepted);
        assert_eq!(store.get(session.id), Some(session));
    }

    #[test]
    fn with_session_persists_flag_changes() {
        let store = SessionStore::new(Duration::from_secs(60));
        let session = store.create();

        store.with_session(session.id, |flags| flags.accept_disclaimer());

        assert!(store.get(session.id).unwrap().flags.disclaimer_accepted);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let a = store.create();
        let b = store.create();

        store.with_session(a.id, |flags| flags.accept_disclaimer());

        assert!(store.get(a.id).unwrap().flags.disclaimer_accepted);
        assert!(!store.get(b.id).unwrap().flags.disclaimer_accepted);
    }

    #[test]
    fn unknown_session_returns_none() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(store.with_session(Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn expired_session_is_dropped_on_access() {
        let store = SessionStore::new(Duration::ZERO);
        let session = store.create();

        assert!(store.get(session.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn purge_expired_drops_idle_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        store.create();
        store.create();

        assert_eq!(store.purge_expired(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn purge_expired_keeps_live_sessions() {
        let store = SessionStore::new(Duration::from_secs(3600));
        store.create();

        assert_eq!(store.purge_expired(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_ends_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let session = store.create();

        assert!(store.remove(session.id));
        assert!(!store.remove(session.id));
        assert!(store.get(session.id).is_none());
    }
}
