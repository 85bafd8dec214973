use rand::rngs::StdRng;
use rand::SeedableRng;
use solace_core::responses::{response_table, CRISIS_TEMPLATES, FALLBACK_SUPPORT};
use solace_core::{
    lock_session, EmotionReading, EngineConfig, Intent, InteractionRecord, KnowledgeEntry,
    KnowledgeLookup, Lexicon, PendingQuestion, Reply, Session, SessionHandle, SessionStore,
    Suggestion,
};
use solace_limbic::{detect_emotion, detect_intent};
use solace_memory::InMemorySessionStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::compose;
use crate::decision::{self, Route, VideoStep};
use crate::selection::{choose_line, choose_video};

/// The reply orchestrator.
///
/// Holds the injected session store, the read-only content and the random
/// source used for every uniform pick. Safe to share across threads.
pub struct ReplyEngine {
    store: Arc<dyn SessionStore>,
    lexicon: Arc<Lexicon>,
    rng: Mutex<StdRng>,
}

impl ReplyEngine {
    /// Engine with an entropy-seeded RNG.
    pub fn new(store: Arc<dyn SessionStore>, lexicon: Arc<Lexicon>) -> Self {
        Self::with_rng(store, lexicon, StdRng::from_entropy())
    }

    /// Engine whose selections are reproducible for a given seed and call order.
    pub fn with_seed(store: Arc<dyn SessionStore>, lexicon: Arc<Lexicon>, seed: u64) -> Self {
        Self::with_rng(store, lexicon, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: Arc<dyn SessionStore>, lexicon: Arc<Lexicon>, rng: StdRng) -> Self {
        Self {
            store,
            lexicon,
            rng: Mutex::new(rng),
        }
    }

    /// In-memory engine built from config: bounded logs, optional content
    /// file, optional fixed seed.
    pub fn from_config(config: &EngineConfig) -> Self {
        let store = Arc::new(InMemorySessionStore::with_log_capacity(
            config.interaction_log_capacity,
        ));
        let lexicon = Arc::new(match &config.content_path {
            Some(path) => Lexicon::load_or_builtin(path),
            None => Lexicon::builtin(),
        });
        match config.rng_seed {
            Some(seed) => Self::with_seed(store, lexicon, seed),
            None => Self::new(store, lexicon),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn detect_emotion(&self, message: &str) -> EmotionReading {
        detect_emotion(message)
    }

    pub fn detect_intent(&self, message: &str) -> Intent {
        detect_intent(message)
    }

    /// Handle to a user's session, creating it if needed.
    pub fn session(&self, user_id: &str) -> SessionHandle {
        self.store.get(user_id)
    }

    /// Handle to a user's session if one exists. Does not create one.
    pub fn find_session(&self, user_id: &str) -> Option<SessionHandle> {
        self.store.find(user_id)
    }

    /// Forget a user's conversational context.
    pub fn clear_session(&self, user_id: &str) {
        self.store.clear(user_id);
    }

    /// Produce the reply to `message` from `user_id`, updating their session.
    ///
    /// Never fails: empty or unrecognized input ends in the neutral support
    /// reply.
    pub fn generate_reply(&self, message: &str, user_id: &str) -> Reply {
        let handle = self.store.get(user_id);
        let mut session = lock_session(&handle);

        let reading = detect_emotion(message);
        let intent = detect_intent(message);
        session.record_interaction(InteractionRecord::now(message, reading, intent));

        let route = decision::route(reading, intent, session.awaiting_clarification());
        tracing::debug!(
            user_id,
            emotion = %reading.kind,
            level = %reading.level,
            intent = %intent,
            route = route.name(),
            "routing message"
        );

        if route != Route::Crisis {
            if let Some(purpose) = intent.answered_purpose() {
                session.video_purpose = Some(purpose);
            }
            session.last_intent = Some(intent);
            session.last_emotion = Some(reading.kind);
        }

        match route {
            Route::Crisis => self.crisis(&mut session, user_id),
            Route::Video => self.video(&mut session, message, reading),
            Route::Search => match self.lexicon.search_knowledge(message) {
                KnowledgeLookup::Match(entry) => self.advise(&mut session, entry, reading),
                KnowledgeLookup::NoMatch => {
                    tracing::debug!(user_id, "no knowledge match, falling back to support");
                    self.support(&mut session, reading)
                }
            },
            Route::Gratitude => compose::gratitude_reply(),
            Route::Support => self.support(&mut session, reading),
        }
    }

    // ========================================================================
    // Branches
    // ========================================================================

    fn crisis(&self, session: &mut Session, user_id: &str) -> Reply {
        tracing::warn!(user_id, "crisis language detected");
        session.last_question_asked = None;
        let template = choose_line(CRISIS_TEMPLATES, &mut *self.rng()).unwrap_or_default();
        compose::crisis_reply(template)
    }

    fn video(&self, session: &mut Session, message: &str, reading: EmotionReading) -> Reply {
        let purpose = match decision::video_step(message, session, reading) {
            VideoStep::Clarify => {
                session.last_question_asked = Some(PendingQuestion::VideoClarification);
                return compose::clarification_reply(reading);
            }
            VideoStep::Serve(purpose) => purpose,
        };

        let videos = self.lexicon.videos_for(purpose);
        let chosen = choose_video(videos, &session.seen_videos, &mut *self.rng());
        let Some(video) = chosen else {
            tracing::warn!(%purpose, "video library has no entries, falling back to support");
            return self.support(session, reading);
        };

        session.seen_videos.push(video.video_id.clone());
        session.last_question_asked = None;
        session.video_purpose = None;
        session.last_suggestion = Some(Suggestion::Video);
        compose::video_reply(purpose, video, reading)
    }

    fn advise(&self, session: &mut Session, entry: &KnowledgeEntry, reading: EmotionReading) -> Reply {
        tracing::debug!(topic = %entry.topic, "knowledge match");
        session.last_question_asked = None;
        session.last_suggestion = Some(Suggestion::Advice);
        compose::knowledge_reply(entry, reading)
    }

    fn support(&self, session: &mut Session, reading: EmotionReading) -> Reply {
        session.last_question_asked = None;
        let candidates = response_table(reading.kind).candidates(reading.level);
        let line = choose_line(candidates, &mut *self.rng()).unwrap_or(FALLBACK_SUPPORT);
        compose::support_reply(line, reading, session.last_suggestion)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::{EmotionKind, Level, ReplyKind};

    fn engine() -> ReplyEngine {
        ReplyEngine::with_seed(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(Lexicon::builtin()),
            7,
        )
    }

    #[test]
    fn test_crisis_leaves_context_untouched() {
        let engine = engine();
        engine.generate_reply("I'm so anxious", "u1");
        let reply = engine.generate_reply("I want to die", "u1");
        assert_eq!(reply.reading(), EmotionReading::crisis());

        let handle = engine.session("u1");
        let session = lock_session(&handle);
        // last_emotion still reflects the message before the crisis
        assert_eq!(session.last_emotion, Some(EmotionKind::Anxiety));
        assert_eq!(session.interaction_log().len(), 2);
        assert!(session.interaction_log()[1].detected_emotion.is_crisis());
    }

    #[test]
    fn test_crisis_clears_pending_question() {
        let engine = engine();
        engine.generate_reply("I want a video", "u1");
        assert!(lock_session(&engine.session("u1")).awaiting_clarification());
        engine.generate_reply("I just want to disappear", "u1");
        assert!(!lock_session(&engine.session("u1")).awaiting_clarification());
    }

    #[test]
    fn test_answer_tag_sets_purpose_even_outside_video_flow() {
        let engine = engine();
        // Not awaiting clarification: "breathing" is plain support but still
        // records the calm purpose for a later video request.
        let reply = engine.generate_reply("breathing", "u1");
        assert_eq!(reply.kind, ReplyKind::Text);
        assert_eq!(
            lock_session(&engine.session("u1")).video_purpose,
            Some(solace_core::VideoPurpose::Calm)
        );

        let reply = engine.generate_reply("can I watch something", "u1");
        assert_eq!(reply.kind, ReplyKind::Video);
        let calm_ids: Vec<String> = engine
            .lexicon()
            .videos_for(solace_core::VideoPurpose::Calm)
            .iter()
            .map(|v| v.video_id.clone())
            .collect();
        assert!(calm_ids.contains(&reply.video.unwrap().video_id));
        assert!(lock_session(&engine.session("u1")).video_purpose.is_none());
    }

    #[test]
    fn test_support_high_anger_has_grounding() {
        let engine = engine();
        let reply = engine.generate_reply("I am really furious", "u1");
        assert_eq!(reply.emotion, EmotionKind::Anger);
        assert_eq!(reply.level, Level::High);
        assert!(reply
            .text
            .ends_with(solace_core::responses::GROUNDING_SCRIPT));
    }

    #[test]
    fn test_find_session_does_not_create() {
        let engine = engine();
        assert!(engine.find_session("u1").is_none());
        assert!(engine.find_session("u1").is_none());
        engine.generate_reply("hello", "u1");
        let handle = engine.find_session("u1").expect("session after a reply");
        assert_eq!(lock_session(&handle).interaction_log().len(), 1);
    }

    #[test]
    fn test_from_config_applies_log_capacity() {
        let engine = ReplyEngine::from_config(&EngineConfig {
            interaction_log_capacity: 2,
            rng_seed: Some(1),
            content_path: None,
        });
        for msg in ["a", "b", "c"] {
            engine.generate_reply(msg, "u1");
        }
        let handle = engine.session("u1");
        let session = lock_session(&handle);
        assert_eq!(session.interaction_log().len(), 2);
        assert_eq!(session.interaction_log()[0].input, "b");
    }
}
