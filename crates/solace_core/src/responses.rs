//! Canned reply text, follow-up questions and suggested actions.

use crate::types::{ActionKind, EmotionKind, Level, MultiModalAction, VideoPurpose};

// ============================================================================
// Support responses
// ============================================================================

/// Candidate responses for one emotion: either one flat list, or lists keyed
/// by intensity where `medium` is the fallback for a missing level.
#[derive(Debug, Clone, Copy)]
pub enum ResponseTable {
    Flat(&'static [&'static str]),
    Graded {
        low: Option<&'static [&'static str]>,
        medium: &'static [&'static str],
        high: Option<&'static [&'static str]>,
    },
}

impl ResponseTable {
    pub fn candidates(&self, level: Level) -> &'static [&'static str] {
        match *self {
            ResponseTable::Flat(list) => list,
            ResponseTable::Graded { low, medium, high } => match level {
                Level::Low => low.unwrap_or(medium),
                Level::Medium => medium,
                Level::High => high.unwrap_or(medium),
            },
        }
    }
}

const ANGER: ResponseTable = ResponseTable::Graded {
    low: Some(&[
        "Sounds like something got under your skin a little. That's allowed.",
        "A bit of irritation is a signal, not a failure. What set it off?",
    ]),
    medium: &[
        "It makes sense to feel angry. Anger often shows up when something matters to us.",
        "I hear the frustration. You don't have to push it away to deal with it.",
    ],
    high: Some(&[
        "That is a lot of anger to hold. Let's slow things down before anything else.",
        "You're really fired up right now, and that's okay. Your body deserves a moment to settle.",
    ]),
};

const BINGE_URGE: ResponseTable = ResponseTable::Graded {
    low: Some(&[
        "Noticing a small urge early is a real skill. It doesn't have to grow.",
        "Thanks for naming the urge. Urges rise and fall, and this one can pass too.",
    ]),
    medium: &[
        "Urges can feel loud, but they are temporary. You don't have to act on this one.",
        "You reached out instead of acting on the urge. That matters.",
    ],
    high: Some(&[
        "This urge feels really strong right now. Let's ride the wave together for a few minutes.",
        "Strong urges peak and then fade. You are safe, and you have time to pause.",
    ]),
};

const GUILT: ResponseTable = ResponseTable::Flat(&[
    "Guilt after eating is really common in recovery, and it doesn't mean you did something wrong.",
    "Food is not a moral test. You're allowed to nourish yourself without earning it.",
    "Be as gentle with yourself as you'd be with a friend who felt this way.",
]);

const ANXIETY: ResponseTable = ResponseTable::Graded {
    low: Some(&[
        "A little worry is understandable. Want to look at what's behind it?",
        "It sounds like there's some unease in the background. You're handling it.",
    ]),
    medium: &[
        "Anxiety can make everything feel urgent. You don't have to solve it all at once.",
        "It's okay to feel anxious. Let's take this one small step at a time.",
    ],
    high: Some(&[
        "That sounds really overwhelming. Let's focus on getting your body a little calmer first.",
        "When anxiety is this loud, slowing your breath is the first thing that helps.",
    ]),
};

const SADNESS: ResponseTable = ResponseTable::Graded {
    low: Some(&[
        "Feeling a bit low is okay. You don't have to be upbeat to be doing well.",
        "Thanks for telling me you're a little down. I'm here with you.",
    ]),
    medium: &[
        "I'm sorry you're feeling this way. Sadness is heavy, and you don't have to carry it alone.",
        "It's okay to feel sad. Recovery has hard days, and this can be one of them.",
    ],
    high: Some(&[
        "That sounds really painful. I'm glad you reached out instead of sitting with it alone.",
        "You're going through something really hard. Would reaching out to someone you trust help today?",
    ]),
};

const NEUTRAL: ResponseTable = ResponseTable::Flat(&[
    "I'm here for you. Tell me a bit more about how things are going.",
    "Thanks for checking in. What's on your mind today?",
    "I'm listening. How has your day been so far?",
]);

/// Response table for an emotion. Crisis never reaches the support flow but
/// maps to the neutral table so the lookup is total.
pub fn response_table(kind: EmotionKind) -> ResponseTable {
    match kind {
        EmotionKind::Anger => ANGER,
        EmotionKind::BingeUrge => BINGE_URGE,
        EmotionKind::Guilt => GUILT,
        EmotionKind::Anxiety => ANXIETY,
        EmotionKind::Sadness => SADNESS,
        EmotionKind::Neutral | EmotionKind::Crisis => NEUTRAL,
    }
}

/// Used only if a table is somehow empty.
pub const FALLBACK_SUPPORT: &str = "I'm here with you. Tell me more about how you're feeling.";

/// Appended to high-intensity anxiety, anger and binge-urge replies.
pub const GROUNDING_SCRIPT: &str = "\n\nLet's try this together:\n\
1. Breathe in slowly for 4 seconds.\n\
2. Name 3 things you can see around you.\n\
3. Press your feet into the floor and notice the ground holding you.";

// ============================================================================
// Crisis
// ============================================================================

pub const CRISIS_TEMPLATES: &[&str] = &[
    "I'm really glad you told me. What you're feeling matters, and you deserve support right now.",
    "It sounds like you're in a lot of pain. You don't have to go through this alone.",
    "Thank you for trusting me with this. Your safety is the most important thing right now.",
];

pub const CRISIS_HOTLINE: &str = "\n\nIf you are in immediate danger, please call your local emergency number. \
In the US you can call or text 988 (Suicide & Crisis Lifeline), or text HOME to 741741 to reach the Crisis Text Line. \
If you're elsewhere, findahelpline.com lists free, confidential services near you.";

// ============================================================================
// Video flow
// ============================================================================

pub const VIDEO_CLARIFICATION: &str = "I'd love to find a video for you. What would help most right now?\n\
1. Feeling calmer or easing anxiety\n\
2. Support around food and eating\n\
3. Motivation for recovery\n\
4. Something else";

pub fn video_intro(purpose: VideoPurpose) -> &'static str {
    match purpose {
        VideoPurpose::Calm => "Here's a video that might help you feel a little calmer:",
        VideoPurpose::Food => "Here's a video with some gentle support around food:",
        VideoPurpose::Motivation => "Here's something to remind you why recovery is worth it:",
    }
}

pub const VIDEO_FOLLOW_UP: &str = "Let me know how you feel after watching. Did it help?";

// ============================================================================
// Knowledge flow
// ============================================================================

pub const DECIDE_NEXT_STEP: &str = "Notice how you feel afterwards and decide what your next small step will be.";

pub const KNOWLEDGE_FOLLOW_UP: &str = "Would you like to try one of these now, or talk it through first?";

// ============================================================================
// Gratitude
// ============================================================================

pub const GRATITUDE_REPLY: &str = "You're very welcome. I'm proud of you for showing up for yourself today. \
I'm here whenever you want to talk.";

// ============================================================================
// Follow-ups
// ============================================================================

pub const FOLLOW_UP_VIDEO: &str = "Did the video help at all?";
pub const FOLLOW_UP_ADVICE: &str = "Does that make sense for where you are right now?";
pub const FOLLOW_UP_GROUNDING: &str = "Would you like to try a short grounding exercise together?";
pub const FOLLOW_UP_DISTRACTION: &str = "Would it help to pick a distraction for the next 15 minutes?";
pub const FOLLOW_UP_GENERIC: &str = "How are you feeling right now?";

// ============================================================================
// Suggested actions
// ============================================================================

pub fn grounding_exercise() -> MultiModalAction {
    MultiModalAction::new(
        ActionKind::Exercise,
        "5-4-3-2-1 grounding",
        "grounding_54321",
    )
}

pub fn calming_audio() -> MultiModalAction {
    MultiModalAction::new(ActionKind::Audio, "Calming breath audio", "calm_breath_audio")
}

pub fn journal_prompt() -> MultiModalAction {
    MultiModalAction::new(ActionKind::Writing, "Write it out", "journal_prompt")
}

pub fn box_breathing() -> MultiModalAction {
    MultiModalAction::new(ActionKind::Exercise, "Box breathing", "box_breathing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graded_table_falls_back_to_medium() {
        let table = ResponseTable::Graded {
            low: None,
            medium: &["m"],
            high: Some(&["h"]),
        };
        assert_eq!(table.candidates(Level::Low), &["m"]);
        assert_eq!(table.candidates(Level::Medium), &["m"]);
        assert_eq!(table.candidates(Level::High), &["h"]);
    }

    #[test]
    fn test_flat_table_ignores_level() {
        let table = response_table(EmotionKind::Guilt);
        assert_eq!(table.candidates(Level::Low), table.candidates(Level::High));
    }

    #[test]
    fn test_every_table_has_candidates() {
        let kinds = [
            EmotionKind::Crisis,
            EmotionKind::Anger,
            EmotionKind::BingeUrge,
            EmotionKind::Guilt,
            EmotionKind::Anxiety,
            EmotionKind::Sadness,
            EmotionKind::Neutral,
        ];
        for kind in kinds {
            for level in [Level::Low, Level::Medium, Level::High] {
                assert!(
                    !response_table(kind).candidates(level).is_empty(),
                    "{kind}/{level} has no responses"
                );
            }
        }
    }

    #[test]
    fn test_clarification_lists_four_options() {
        for n in 1..=4 {
            assert!(VIDEO_CLARIFICATION.contains(&format!("{n}.")));
        }
    }
}
