use solace_core::lexicon::{
    contains_any, CRISIS_PHRASES, EMOTION_GROUPS, HIGH_INTENSITY, LOW_INTENSITY,
};
use solace_core::{EmotionReading, Level};

/// Classify the emotion in `text`.
///
/// Crisis language wins over everything else. Otherwise the first matching
/// emotion group decides the type and the intensity words decide the level.
/// Unmatched text is `neutral`/`medium`.
pub fn detect_emotion(text: &str) -> EmotionReading {
    let lowered = text.to_lowercase();

    if is_crisis_lowered(&lowered) {
        tracing::trace!("crisis phrase matched");
        return EmotionReading::crisis();
    }

    EMOTION_GROUPS
        .iter()
        .find(|(_, words)| contains_any(&lowered, words))
        .map(|(kind, _)| EmotionReading::new(*kind, grade_lowered(&lowered)))
        .unwrap_or_else(EmotionReading::neutral)
}

/// True if `text` contains any crisis phrase.
pub fn is_crisis(text: &str) -> bool {
    is_crisis_lowered(&text.to_lowercase())
}

/// Intensity grade of `text`: high words beat low words, default medium.
pub fn grade_intensity(text: &str) -> Level {
    grade_lowered(&text.to_lowercase())
}

fn is_crisis_lowered(lowered: &str) -> bool {
    contains_any(lowered, CRISIS_PHRASES)
}

fn grade_lowered(lowered: &str) -> Level {
    if contains_any(lowered, HIGH_INTENSITY) {
        Level::High
    } else if contains_any(lowered, LOW_INTENSITY) {
        Level::Low
    } else {
        Level::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::EmotionKind;

    fn reading(kind: EmotionKind, level: Level) -> EmotionReading {
        EmotionReading::new(kind, level)
    }

    #[test]
    fn test_crisis_beats_other_emotions() {
        assert_eq!(
            detect_emotion("I hate myself and want to die"),
            EmotionReading::crisis()
        );
        assert_eq!(
            detect_emotion("I'm so angry I could hurt myself"),
            EmotionReading::crisis()
        );
    }

    #[test]
    fn test_every_crisis_phrase_detected() {
        for phrase in CRISIS_PHRASES {
            let text = format!("Honestly {} right now", phrase.to_uppercase());
            assert_eq!(detect_emotion(&text), EmotionReading::crisis(), "{phrase}");
        }
    }

    #[test]
    fn test_group_priority() {
        // anger is checked before anxiety
        assert_eq!(
            detect_emotion("I'm anxious and frustrated"),
            reading(EmotionKind::Anger, Level::Medium)
        );
        // binge_urge before guilt
        assert_eq!(
            detect_emotion("I feel guilty about the binge"),
            reading(EmotionKind::BingeUrge, Level::Medium)
        );
        // guilt before sadness
        assert_eq!(
            detect_emotion("sad and ashamed"),
            reading(EmotionKind::Guilt, Level::Medium)
        );
    }

    #[test]
    fn test_intensity_levels() {
        assert_eq!(
            detect_emotion("I'm really worried about lunch"),
            reading(EmotionKind::Anxiety, Level::High)
        );
        assert_eq!(
            detect_emotion("a little lonely tonight"),
            reading(EmotionKind::Sadness, Level::Low)
        );
        // high wins when both kinds of word appear
        assert_eq!(
            detect_emotion("slightly nervous but very scared"),
            reading(EmotionKind::Anxiety, Level::High)
        );
        assert_eq!(
            detect_emotion("I have a craving"),
            reading(EmotionKind::BingeUrge, Level::Medium)
        );
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(detect_emotion(""), EmotionReading::neutral());
        assert_eq!(detect_emotion("hello there"), EmotionReading::neutral());
        assert_eq!(detect_emotion("🙂🙂 ¿qué?"), EmotionReading::neutral());
    }

    #[test]
    fn test_intensity_without_emotion_stays_neutral() {
        // Intensity words alone never produce a non-neutral reading
        assert_eq!(detect_emotion("very very good"), EmotionReading::neutral());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            detect_emotion("I AM FURIOUS"),
            reading(EmotionKind::Anger, Level::Medium)
        );
        assert!(is_crisis("SUICIDE"));
        assert!(!is_crisis("I'm fine"));
    }

    #[test]
    fn test_grade_intensity() {
        assert_eq!(grade_intensity("extremely"), Level::High);
        assert_eq!(grade_intensity("a bit"), Level::Low);
        assert_eq!(grade_intensity("ok"), Level::Medium);
    }
}
