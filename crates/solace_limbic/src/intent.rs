use solace_core::lexicon::{contains_any, CLARIFICATION_TOPICS, INTENT_GROUPS, VIDEO_KEYWORD};
use solace_core::Intent;

/// Classify what the user is asking for. First matching group wins; anything
/// unmatched is `Support`.
pub fn detect_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    INTENT_GROUPS
        .iter()
        .find(|(_, words)| contains_any(&lowered, words))
        .map_or(Intent::Support, |(intent, _)| *intent)
}

/// True if `text` asks for a video without naming any topic, so the engine
/// should ask which kind of video would help.
pub fn needs_clarification(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains(VIDEO_KEYWORD) && !contains_any(&lowered, CLARIFICATION_TOPICS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_beats_topic_words() {
        assert_eq!(detect_intent("what are some tips for anxiety"), Intent::Search);
    }

    #[test]
    fn test_video_dominates() {
        assert_eq!(detect_intent("how do I watch that"), Intent::Video);
        assert_eq!(detect_intent("thanks, any video on food?"), Intent::Video);
        assert_eq!(detect_intent("VIDEO please"), Intent::Video);
    }

    #[test]
    fn test_answer_tags() {
        assert_eq!(detect_intent("1, calm please"), Intent::VideoAnswerCalm);
        assert_eq!(detect_intent("breathing"), Intent::VideoAnswerCalm);
        assert_eq!(detect_intent("food"), Intent::VideoAnswerFood);
        assert_eq!(detect_intent("I struggle a lot"), Intent::VideoAnswerFood);
        assert_eq!(detect_intent("motivation"), Intent::VideoAnswerMotivation);
        assert_eq!(detect_intent("my recovery"), Intent::VideoAnswerMotivation);
    }

    #[test]
    fn test_gratitude() {
        assert_eq!(detect_intent("thank you so much"), Intent::Gratitude);
        assert_eq!(detect_intent("okay"), Intent::Gratitude);
    }

    #[test]
    fn test_support_fallback() {
        assert_eq!(detect_intent(""), Intent::Support);
        assert_eq!(detect_intent("I feel sad today"), Intent::Support);
        assert_eq!(detect_intent("??!!"), Intent::Support);
    }

    #[test]
    fn test_needs_clarification() {
        assert!(needs_clarification("I want a video"));
        assert!(needs_clarification("Another VIDEO"));
        assert!(!needs_clarification("a calm video"));
        assert!(!needs_clarification("video about food"));
        assert!(!needs_clarification("video for anxiety"));
        assert!(!needs_clarification("motivation video"));
        // "watch" triggers the video intent but not clarification
        assert!(!needs_clarification("I want to watch something"));
    }
}
