use solace_core::{EmotionKind, EmotionReading, Intent, Session, VideoPurpose};
use solace_limbic::needs_clarification;

// ============================================================================
// Routes
// ============================================================================

/// Reply strategy for one message. Exactly one applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Crisis,
    Video,
    Search,
    Gratitude,
    /// Default support; also where a search with no knowledge match ends up.
    Support,
}

impl Route {
    /// Name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Crisis => "crisis",
            Route::Video => "video",
            Route::Search => "search",
            Route::Gratitude => "gratitude",
            Route::Support => "support",
        }
    }
}

/// Pick the branch for a message. First match wins:
/// crisis, then video (asked for, or answering a pending clarification),
/// then search, gratitude, and finally support.
pub fn route(reading: EmotionReading, intent: Intent, awaiting_clarification: bool) -> Route {
    if reading.is_crisis() {
        return Route::Crisis;
    }

    let answers_clarification = awaiting_clarification
        && (intent.answered_purpose().is_some() || intent == Intent::Support);
    if intent == Intent::Video || answers_clarification {
        return Route::Video;
    }

    match intent {
        Intent::Search => Route::Search,
        Intent::Gratitude => Route::Gratitude,
        _ => Route::Support,
    }
}

// ============================================================================
// Video flow
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStep {
    /// Ask which kind of video would help.
    Clarify,
    /// Serve a video for this purpose.
    Serve(VideoPurpose),
}

/// Decide whether to ask a clarification question or serve a video.
/// A clarification is never asked twice in a row.
pub fn video_step(message: &str, session: &Session, reading: EmotionReading) -> VideoStep {
    if needs_clarification(message) && !session.awaiting_clarification() {
        VideoStep::Clarify
    } else {
        VideoStep::Serve(resolve_purpose(message, session.video_purpose, reading.kind))
    }
}

/// Sticky session purpose first, then message content and emotion, then
/// motivation.
pub fn resolve_purpose(
    message: &str,
    sticky: Option<VideoPurpose>,
    emotion: EmotionKind,
) -> VideoPurpose {
    if let Some(purpose) = sticky {
        return purpose;
    }
    let lowered = message.to_lowercase();
    if lowered.contains("calm") || matches!(emotion, EmotionKind::Anger | EmotionKind::Anxiety) {
        VideoPurpose::Calm
    } else if lowered.contains("food") || emotion == EmotionKind::BingeUrge {
        VideoPurpose::Food
    } else {
        VideoPurpose::Motivation
    }
}

// ============================================================================
// Tests
// ============================================================================
