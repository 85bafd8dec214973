//! Value types that flow between the classifiers, the reply engine and callers.
//!
//! The serde representation of [`Reply`] is the wire contract with the host
//! application, so field names and tag spellings here must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Emotion
// ============================================================================

/// Classified affective state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    /// Possible self-harm or suicidality language. Always highest priority.
    Crisis,
    Anger,
    BingeUrge,
    Guilt,
    Anxiety,
    Sadness,
    Neutral,
}

impl EmotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Crisis => "crisis",
            EmotionKind::Anger => "anger",
            EmotionKind::BingeUrge => "binge_urge",
            EmotionKind::Guilt => "guilt",
            EmotionKind::Anxiety => "anxiety",
            EmotionKind::Sadness => "sadness",
            EmotionKind::Neutral => "neutral",
        }
    }

    /// Emotions whose high-intensity support replies carry the grounding script.
    pub fn wants_grounding(&self) -> bool {
        matches!(
            self,
            EmotionKind::Anxiety | EmotionKind::Anger | EmotionKind::BingeUrge
        )
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity of a detected emotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the emotion classifier: `{type, level}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionReading {
    #[serde(rename = "type")]
    pub kind: EmotionKind,
    pub level: Level,
}

impl EmotionReading {
    pub const fn new(kind: EmotionKind, level: Level) -> Self {
        Self { kind, level }
    }

    pub const fn neutral() -> Self {
        Self::new(EmotionKind::Neutral, Level::Medium)
    }

    pub const fn crisis() -> Self {
        Self::new(EmotionKind::Crisis, Level::High)
    }

    pub fn is_crisis(&self) -> bool {
        self.kind == EmotionKind::Crisis
    }
}

// ============================================================================
// Intent
// ============================================================================

/// Coarse classification of what the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Video,
    Search,
    VideoAnswerCalm,
    VideoAnswerFood,
    VideoAnswerMotivation,
    Gratitude,
    Support,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Video => "video",
            Intent::Search => "search",
            Intent::VideoAnswerCalm => "video_answer_calm",
            Intent::VideoAnswerFood => "video_answer_food",
            Intent::VideoAnswerMotivation => "video_answer_motivation",
            Intent::Gratitude => "gratitude",
            Intent::Support => "support",
        }
    }

    /// The video purpose this intent answers, if it is one of the
    /// clarification answer tags.
    pub fn answered_purpose(&self) -> Option<VideoPurpose> {
        match self {
            Intent::VideoAnswerCalm => Some(VideoPurpose::Calm),
            Intent::VideoAnswerFood => Some(VideoPurpose::Food),
            Intent::VideoAnswerMotivation => Some(VideoPurpose::Motivation),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Videos
// ============================================================================

/// Grouping key of the video library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPurpose {
    Calm,
    Food,
    Motivation,
}

impl VideoPurpose {
    pub const ALL: [VideoPurpose; 3] = [
        VideoPurpose::Calm,
        VideoPurpose::Food,
        VideoPurpose::Motivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPurpose::Calm => "calm",
            VideoPurpose::Food => "food",
            VideoPurpose::Motivation => "motivation",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "calm" => Some(VideoPurpose::Calm),
            "food" => Some(VideoPurpose::Food),
            "motivation" => Some(VideoPurpose::Motivation),
            _ => None,
        }
    }
}

impl fmt::Display for VideoPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hosting platform of a video. Only YouTube is served today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Youtube,
}

/// Video payload attached to a `video` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub title: String,
    pub video_id: String,
    pub platform: Platform,
}

// ============================================================================
// Reply
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Text,
    Video,
}

/// Vocabulary of interactive suggestions a client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Exercise,
    Audio,
    Writing,
    Video,
}

/// A suggested interactive action (`{type, label, id}` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiModalAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: String,
    pub id: String,
}

impl MultiModalAction {
    pub fn new(kind: ActionKind, label: &str, id: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            id: id.to_string(),
        }
    }
}

/// Structured reply returned to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub text: String,
    pub emotion: EmotionKind,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_modal: Option<Vec<MultiModalAction>>,
}

impl Reply {
    /// A plain text reply tagged with the given emotion reading.
    pub fn text(text: impl Into<String>, reading: EmotionReading) -> Self {
        Self {
            kind: ReplyKind::Text,
            text: text.into(),
            emotion: reading.kind,
            level: reading.level,
            video: None,
            follow_up: None,
            multi_modal: None,
        }
    }

    /// A video reply: intro text plus the chosen video.
    pub fn video(text: impl Into<String>, video: VideoRef, reading: EmotionReading) -> Self {
        Self {
            kind: ReplyKind::Video,
            video: Some(video),
            ..Self::text(text, reading)
        }
    }

    pub fn with_follow_up(mut self, follow_up: impl Into<String>) -> Self {
        self.follow_up = Some(follow_up.into());
        self
    }

    pub fn with_actions(mut self, actions: Vec<MultiModalAction>) -> Self {
        self.multi_modal = Some(actions);
        self
    }

    pub fn reading(&self) -> EmotionReading {
        EmotionReading::new(self.emotion, self.level)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reply_omits_optional_fields() {
        let reply = Reply::text("hi", EmotionReading::neutral());
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["emotion"], "neutral");
        assert_eq!(json["level"], "medium");
        assert!(json.get("video").is_none());
        assert!(json.get("followUp").is_none());
        assert!(json.get("multiModal").is_none());
    }

    #[test]
    fn test_video_reply_wire_shape() {
        let reply = Reply::video(
            "Here is one.",
            VideoRef {
                title: "Box Breathing".into(),
                video_id: "abc123".into(),
                platform: Platform::Youtube,
            },
            EmotionReading::new(EmotionKind::BingeUrge, Level::High),
        )
        .with_follow_up("Did it help?")
        .with_actions(vec![MultiModalAction::new(
            ActionKind::Exercise,
            "Box breathing",
            "box_breathing",
        )]);

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["emotion"], "binge_urge");
        assert_eq!(json["level"], "high");
        assert_eq!(json["video"]["videoId"], "abc123");
        assert_eq!(json["video"]["platform"], "youtube");
        assert_eq!(json["followUp"], "Did it help?");
        assert_eq!(json["multiModal"][0]["type"], "exercise");
        assert_eq!(json["multiModal"][0]["id"], "box_breathing");
    }

    #[test]
    fn test_emotion_reading_uses_type_key() {
        let json = serde_json::to_string(&EmotionReading::crisis()).unwrap();
        assert_eq!(json, r#"{"type":"crisis","level":"high"}"#);
    }

    #[test]
    fn test_intent_answered_purpose() {
        assert_eq!(
            Intent::VideoAnswerFood.answered_purpose(),
            Some(VideoPurpose::Food)
        );
        assert_eq!(Intent::Video.answered_purpose(), None);
        assert_eq!(Intent::Support.answered_purpose(), None);
    }

    #[test]
    fn test_purpose_parse() {
        assert_eq!(VideoPurpose::parse_str(" Calm "), Some(VideoPurpose::Calm));
        assert_eq!(VideoPurpose::parse_str("sleep"), None);
    }

    #[test]
    fn test_grounding_emotions() {
        assert!(EmotionKind::Anxiety.wants_grounding());
        assert!(EmotionKind::BingeUrge.wants_grounding());
        assert!(!EmotionKind::Sadness.wants_grounding());
        assert!(!EmotionKind::Crisis.wants_grounding());
    }
}
