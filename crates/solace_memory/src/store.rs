use solace_core::{Session, SessionHandle, SessionStore, DEFAULT_LOG_CAPACITY};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// `HashMap`-backed [`SessionStore`].
///
/// The map lock is held only long enough to find or insert a handle; the
/// per-session mutex inside the handle is what serializes work for one user.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    log_capacity: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_log_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Sessions created by this store keep at most `log_capacity`
    /// interaction records.
    pub fn with_log_capacity(log_capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            log_capacity,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if a session exists for `user_id`, without creating one.
    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(user_id)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_id: &str) -> SessionHandle {
        if let Some(handle) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
        {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have inserted between the read and write locks.
        let handle = sessions.entry(user_id.to_string()).or_insert_with(|| {
            tracing::debug!(user_id, "creating session");
            Arc::new(Mutex::new(Session::with_log_capacity(
                user_id,
                self.log_capacity,
            )))
        });
        Arc::clone(handle)
    }

    fn find(&self, user_id: &str) -> Option<SessionHandle> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn clear(&self, user_id: &str) {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id);
        if removed.is_some() {
            tracing::debug!(user_id, "session cleared");
        }
    }
}
