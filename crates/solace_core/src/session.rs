//! Per-user conversation state and the store contract.
//!
//! A session is only ever touched through the handle returned by
//! [`SessionStore::get`]. The handle's mutex serializes replies for the same
//! user; replies for different users never share a session.

use crate::types::{EmotionKind, EmotionReading, Intent, VideoPurpose};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default bound on each session's interaction log.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Question the engine is waiting on an answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingQuestion {
    VideoClarification,
}

/// What the engine last offered, used to pick a follow-up question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suggestion {
    Video,
    Advice,
}

/// One diagnostic log line per processed message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionRecord {
    /// Unix timestamp (seconds).
    pub timestamp: i64,
    pub input: String,
    pub detected_emotion: EmotionReading,
    pub detected_intent: Intent,
}

impl InteractionRecord {
    pub fn now(input: &str, detected_emotion: EmotionReading, detected_intent: Intent) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp(),
            input: input.to_string(),
            detected_emotion,
            detected_intent,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user_id: String,
    /// Purpose picked while answering a clarification question; cleared once
    /// a video is served.
    pub video_purpose: Option<VideoPurpose>,
    pub last_question_asked: Option<PendingQuestion>,
    pub last_intent: Option<Intent>,
    pub last_emotion: Option<EmotionKind>,
    pub last_suggestion: Option<Suggestion>,
    /// Append-only, in the order videos were shown.
    pub seen_videos: Vec<String>,
    interaction_log: VecDeque<InteractionRecord>,
    #[serde(skip)]
    log_capacity: usize,
}

impl Session {
    pub fn new(user_id: &str) -> Self {
        Self::with_log_capacity(user_id, DEFAULT_LOG_CAPACITY)
    }

    /// A fresh session whose interaction log keeps at most `log_capacity`
    /// records (oldest evicted first). Zero disables retention.
    pub fn with_log_capacity(user_id: &str, log_capacity: usize) -> Self {
        Self {
            user_id: user_id.to_string(),
            video_purpose: None,
            last_question_asked: None,
            last_intent: None,
            last_emotion: None,
            last_suggestion: None,
            seen_videos: Vec::new(),
            interaction_log: VecDeque::with_capacity(log_capacity.min(16)),
            log_capacity,
        }
    }

    pub fn record_interaction(&mut self, record: InteractionRecord) {
        if self.log_capacity == 0 {
            return;
        }
        while self.interaction_log.len() >= self.log_capacity {
            self.interaction_log.pop_front();
        }
        self.interaction_log.push_back(record);
    }

    pub fn interaction_log(&self) -> &VecDeque<InteractionRecord> {
        &self.interaction_log
    }

    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }

    pub fn awaiting_clarification(&self) -> bool {
        self.last_question_asked == Some(PendingQuestion::VideoClarification)
    }
}

/// Shared, lockable handle to one user's session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Lock a session handle. A panic in another reply for the same user must not
/// wedge the session, so poisoning is ignored.
pub fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Storage for per-user sessions.
pub trait SessionStore: Send + Sync {
    /// Existing session for `user_id`, or a newly stored default one.
    fn get(&self, user_id: &str) -> SessionHandle;

    /// Existing session for `user_id`. Never creates one.
    fn find(&self, user_id: &str) -> Option<SessionHandle>;

    /// Drop the session for `user_id` if present. Idempotent.
    fn clear(&self, user_id: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(input: &str) -> InteractionRecord {
        InteractionRecord::now(input, EmotionReading::neutral(), Intent::Support)
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new("u1");
        assert_eq!(session.user_id, "u1");
        assert!(session.video_purpose.is_none());
        assert!(session.last_question_asked.is_none());
        assert!(session.last_suggestion.is_none());
        assert!(session.seen_videos.is_empty());
        assert!(session.interaction_log().is_empty());
        assert_eq!(session.log_capacity(), DEFAULT_LOG_CAPACITY);
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut session = Session::with_log_capacity("u1", 2);
        session.record_interaction(record("one"));
        session.record_interaction(record("two"));
        session.record_interaction(record("three"));
        let inputs: Vec<&str> = session
            .interaction_log()
            .iter()
            .map(|r| r.input.as_str())
            .collect();
        assert_eq!(inputs, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut session = Session::with_log_capacity("u1", 0);
        session.record_interaction(record("one"));
        assert!(session.interaction_log().is_empty());
    }

    #[test]
    fn test_awaiting_clarification() {
        let mut session = Session::new("u1");
        assert!(!session.awaiting_clarification());
        session.last_question_asked = Some(PendingQuestion::VideoClarification);
        assert!(session.awaiting_clarification());
    }

    #[test]
    fn test_snapshot_serializes_log() {
        let mut session = Session::new("u1");
        session.seen_videos.push("abc".into());
        session.record_interaction(record("hello"));
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["seen_videos"][0], "abc");
        assert_eq!(json["interaction_log"][0]["input"], "hello");
        assert_eq!(json["interaction_log"][0]["detected_intent"], "support");
        assert!(json.get("log_capacity").is_none());
    }

    #[test]
    fn test_poisoned_handle_still_locks() {
        let handle: SessionHandle = Arc::new(Mutex::new(Session::new("u1")));
        let clone = Arc::clone(&handle);
        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("boom");
        })
        .join();
        assert!(handle.is_poisoned());
        assert_eq!(lock_session(&handle).user_id, "u1");
    }
}
