//! Keyword tables scanned by the classifiers.
//!
//! Matching is plain substring containment over lower-cased text. Group order
//! is significant: the first group that matches decides the result, so a table
//! reorder is a behavior change.
//!
//! The crisis list is deliberately a short, reviewed list. It under-triggers on
//! paraphrased distress and over-triggers on unrelated uses of the same words;
//! changes to it go through product review, not drive-by edits.

use crate::types::{EmotionKind, Intent};

// ============================================================================
// Emotion
// ============================================================================

/// Self-harm and suicidality phrases. Checked before everything else.
pub const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "end everything",
    "suicide",
    "disappear",
    "can't do this anymore",
    "want to die",
    "hurt myself",
];

const ANGER: &[&str] = &[
    "angry",
    "furious",
    "mad at",
    "annoyed",
    "irritated",
    "frustrated",
    "pissed",
];

const BINGE_URGE: &[&str] = &[
    "binge",
    "urge",
    "overeat",
    "craving",
    "can't stop eating",
    "stuff myself",
    "out of control",
];

const GUILT: &[&str] = &[
    "guilt",
    "guilty",
    "ashamed",
    "shame",
    "regret",
    "disgusted with myself",
];

const ANXIETY: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "nervous",
    "panic",
    "scared",
    "afraid",
    "overwhelmed",
];

const SADNESS: &[&str] = &[
    "sad",
    "depressed",
    "lonely",
    "hopeless",
    "crying",
    "empty",
    "miserable",
    "feeling down",
];

/// Emotion groups in priority order.
pub const EMOTION_GROUPS: &[(EmotionKind, &[&str])] = &[
    (EmotionKind::Anger, ANGER),
    (EmotionKind::BingeUrge, BINGE_URGE),
    (EmotionKind::Guilt, GUILT),
    (EmotionKind::Anxiety, ANXIETY),
    (EmotionKind::Sadness, SADNESS),
];

/// Any of these raises a matched emotion to `high`.
pub const HIGH_INTENSITY: &[&str] = &["very", "really", "extremely", "hate", "can't stand"];

/// Any of these lowers a matched emotion to `low` (when not already `high`).
pub const LOW_INTENSITY: &[&str] = &["bit", "little", "slightly"];

// ============================================================================
// Intent
// ============================================================================

/// Intent groups in priority order. `Support` is the fallback and has no group.
pub const INTENT_GROUPS: &[(Intent, &[&str])] = &[
    (Intent::Video, &["video", "watch"]),
    (Intent::Search, &["how", "what", "tip", "advice", "help me with"]),
    (
        Intent::VideoAnswerCalm,
        &["calm", "breathing", "anger", "anxiety"],
    ),
    (Intent::VideoAnswerFood, &["food", "eat", "struggle"]),
    (Intent::VideoAnswerMotivation, &["motivation", "recovery"]),
    (Intent::Gratitude, &["thank", "thanks", "okay", "good"]),
];

/// A video request mentioning none of these gets a clarification question.
pub const CLARIFICATION_TOPICS: &[&str] = &["calm", "food", "anxiety", "motivation"];

pub const VIDEO_KEYWORD: &str = "video";

// ============================================================================
// Helpers
// ============================================================================

/// True if `text` contains any of `words`. `text` must already be lower-cased.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}
