//! # Solace Limbic Layer
//!
//! Fast, deterministic reading of a raw message, before any reply is chosen:
//!
//! - [`detect_emotion`]: crisis check first, then ordered emotion groups with
//!   an intensity grade
//! - [`detect_intent`]: ordered intent groups, falling back to `support`
//! - [`needs_clarification`]: whether a video request names no topic
//!
//! Every function here is a pure function of its input text. Matching is
//! keyword containment over lower-cased text, in table order; see
//! [`solace_core::lexicon`] for the tables.

mod emotion;
mod intent;

pub use emotion::{detect_emotion, grade_intensity, is_crisis};
pub use intent::{detect_intent, needs_clarification};
