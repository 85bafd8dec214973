//! Reply assembly for each branch. Nothing here touches the session.

use solace_core::responses::{
    box_breathing, calming_audio, grounding_exercise, journal_prompt, video_intro,
    CRISIS_HOTLINE, DECIDE_NEXT_STEP, FOLLOW_UP_ADVICE, FOLLOW_UP_DISTRACTION,
    FOLLOW_UP_GENERIC, FOLLOW_UP_GROUNDING, FOLLOW_UP_VIDEO, GRATITUDE_REPLY, GROUNDING_SCRIPT,
    KNOWLEDGE_FOLLOW_UP, VIDEO_CLARIFICATION, VIDEO_FOLLOW_UP,
};
use solace_core::{
    EmotionKind, EmotionReading, KnowledgeEntry, Level, Reply, Suggestion, VideoPurpose,
    VideoResource,
};

pub fn crisis_reply(template: &str) -> Reply {
    Reply::text(format!("{template}{CRISIS_HOTLINE}"), EmotionReading::crisis())
        .with_actions(vec![grounding_exercise(), calming_audio()])
}

pub fn clarification_reply(reading: EmotionReading) -> Reply {
    Reply::text(VIDEO_CLARIFICATION, reading)
}

pub fn video_reply(purpose: VideoPurpose, video: &VideoResource, reading: EmotionReading) -> Reply {
    Reply::video(video_intro(purpose), video.to_ref(), reading).with_follow_up(VIDEO_FOLLOW_UP)
}

/// Validation followed by a three-step plan: the entry's suggestion, its
/// optional step, and a fixed "decide your next step".
pub fn knowledge_reply(entry: &KnowledgeEntry, reading: EmotionReading) -> Reply {
    let text = format!(
        "{}\n\nHere's a small plan you could try:\n1. {}\n2. {}\n3. {}",
        entry.response.validate, entry.response.suggest, entry.response.optional_step, DECIDE_NEXT_STEP,
    );
    Reply::text(text, reading)
        .with_follow_up(KNOWLEDGE_FOLLOW_UP)
        .with_actions(vec![journal_prompt(), box_breathing()])
}

/// Closing reply; always neutral regardless of what was detected.
pub fn gratitude_reply() -> Reply {
    Reply::text(GRATITUDE_REPLY, EmotionReading::neutral())
}

/// Default support reply built around one canned line.
pub fn support_reply(
    line: &str,
    reading: EmotionReading,
    last_suggestion: Option<Suggestion>,
) -> Reply {
    let mut text = line.to_string();
    if reading.level == Level::High && reading.kind.wants_grounding() {
        text.push_str(GROUNDING_SCRIPT);
    }

    let actions = if reading.kind == EmotionKind::Neutral {
        Vec::new()
    } else {
        vec![calming_audio(), journal_prompt()]
    };

    Reply::text(text, reading)
        .with_follow_up(follow_up_for(last_suggestion, reading.kind))
        .with_actions(actions)
}

/// Follow-up question for the support flow: the last thing offered decides
/// first, then the emotion.
pub fn follow_up_for(last_suggestion: Option<Suggestion>, emotion: EmotionKind) -> &'static str {
    match (last_suggestion, emotion) {
        (Some(Suggestion::Video), _) => FOLLOW_UP_VIDEO,
        (Some(Suggestion::Advice), _) => FOLLOW_UP_ADVICE,
        (None, EmotionKind::Anxiety | EmotionKind::Anger) => FOLLOW_UP_GROUNDING,
        (None, EmotionKind::BingeUrge) => FOLLOW_UP_DISTRACTION,
        (None, _) => FOLLOW_UP_GENERIC,
    }
}
