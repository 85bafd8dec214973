//! # Solace Core
//!
//! Types and static content shared by every Solace crate:
//!
//! - [`types`]: emotion readings, intents and the [`Reply`] wire shape
//! - [`lexicon`]: the ordered keyword groups the classifiers scan
//! - [`responses`]: canned reply text, follow-ups and suggested actions
//! - [`content`]: knowledge base and video library ([`Lexicon`])
//! - [`session`]: per-user conversation state and the [`SessionStore`] contract
//! - [`config`]: TOML configuration with env overrides

pub mod config;
pub mod content;
pub mod lexicon;
pub mod responses;
pub mod session;
pub mod types;

pub use config::{EngineConfig, GatewayConfig, SolaceConfig};
pub use content::{
    ContentError, KnowledgeEntry, KnowledgeLookup, KnowledgeResponse, Lexicon, VideoResource,
};
pub use session::{
    lock_session, InteractionRecord, PendingQuestion, Session, SessionHandle, SessionStore,
    Suggestion, DEFAULT_LOG_CAPACITY,
};
pub use types::{
    ActionKind, EmotionKind, EmotionReading, Intent, Level, MultiModalAction, Platform, Reply,
    ReplyKind, VideoPurpose, VideoRef,
};
