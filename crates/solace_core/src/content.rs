//! Knowledge base and video library.
//!
//! Both ship with built-in defaults and can be replaced section by section
//! from a TOML content file:
//!
//! ```toml
//! [[knowledge]]
//! topic = "sleep"
//! keywords = ["sleep", "insomnia"]
//! response = { validate = "...", suggest = "...", optional_step = "..." }
//!
//! [videos]
//! calm = [{ title = "Body scan", video_id = "abc123" }]
//! ```

use crate::types::{Platform, VideoPurpose, VideoRef};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown video purpose '{0}' (expected calm, food or motivation)")]
    UnknownPurpose(String),
    #[error("video group '{0}' is empty")]
    EmptyVideoGroup(VideoPurpose),
}

// ============================================================================
// Data model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeResponse {
    pub validate: String,
    pub suggest: String,
    pub optional_step: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeEntry {
    pub topic: String,
    pub keywords: Vec<String>,
    pub response: KnowledgeResponse,
}

impl KnowledgeEntry {
    /// True if any keyword occurs in `lowered` (already lower-cased text).
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoResource {
    pub title: String,
    pub video_id: String,
    #[serde(default)]
    pub platform: Platform,
}

impl VideoResource {
    pub fn to_ref(&self) -> VideoRef {
        VideoRef {
            title: self.title.clone(),
            video_id: self.video_id.clone(),
            platform: self.platform,
        }
    }
}

/// Outcome of a knowledge-base search. `NoMatch` is an ordinary result that
/// callers route onward, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeLookup<'a> {
    Match(&'a KnowledgeEntry),
    NoMatch,
}

// ============================================================================
// Lexicon
// ============================================================================

/// Read-only content store consulted by the reply engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    knowledge: Vec<KnowledgeEntry>,
    videos: HashMap<VideoPurpose, Vec<VideoResource>>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentFile {
    knowledge: Option<Vec<KnowledgeEntry>>,
    #[serde(default)]
    videos: HashMap<String, Vec<VideoResource>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in knowledge base and video library.
    pub fn builtin() -> Self {
        let knowledge = BUILTIN_KNOWLEDGE
            .iter()
            .map(|(topic, keywords, validate, suggest, optional_step)| KnowledgeEntry {
                topic: topic.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                response: KnowledgeResponse {
                    validate: validate.to_string(),
                    suggest: suggest.to_string(),
                    optional_step: optional_step.to_string(),
                },
            })
            .collect();

        let videos = BUILTIN_VIDEOS
            .iter()
            .map(|(purpose, list)| {
                let resources = list
                    .iter()
                    .map(|(title, video_id)| VideoResource {
                        title: title.to_string(),
                        video_id: video_id.to_string(),
                        platform: Platform::Youtube,
                    })
                    .collect();
                (*purpose, resources)
            })
            .collect();

        Self { knowledge, videos }
    }

    /// Load a content file. Sections present in the file replace the
    /// corresponding built-in section; absent sections keep the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ContentFile = toml::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::builtin().merged(file)
    }

    /// Like [`Lexicon::load`], but logs and falls back to the built-in content
    /// on any failure.
    pub fn load_or_builtin<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(lexicon) => {
                tracing::info!("Loaded content from {}", path.as_ref().display());
                lexicon
            }
            Err(e) => {
                tracing::warn!("Content file unusable ({}), using built-in content", e);
                Self::builtin()
            }
        }
    }

    fn merged(mut self, file: ContentFile) -> Result<Self, ContentError> {
        if let Some(knowledge) = file.knowledge {
            self.knowledge = knowledge
                .into_iter()
                .map(|mut entry| {
                    entry.keywords = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
                    entry
                })
                .collect();
        }
        for (key, list) in file.videos {
            let purpose =
                VideoPurpose::parse_str(&key).ok_or_else(|| ContentError::UnknownPurpose(key))?;
            if list.is_empty() {
                return Err(ContentError::EmptyVideoGroup(purpose));
            }
            self.videos.insert(purpose, list);
        }
        Ok(self)
    }

    pub fn knowledge(&self) -> &[KnowledgeEntry] {
        &self.knowledge
    }

    /// First entry, in table order, with a keyword contained in `text`.
    pub fn search_knowledge(&self, text: &str) -> KnowledgeLookup<'_> {
        let lowered = text.to_lowercase();
        self.knowledge
            .iter()
            .find(|entry| entry.matches(&lowered))
            .map_or(KnowledgeLookup::NoMatch, KnowledgeLookup::Match)
    }

    /// Videos for a purpose, falling back to the motivation group.
    pub fn videos_for(&self, purpose: VideoPurpose) -> &[VideoResource] {
        self.videos
            .get(&purpose)
            .or_else(|| self.videos.get(&VideoPurpose::Motivation))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ============================================================================
// Built-in content
// ============================================================================

type KnowledgeRow = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
    &'static str,
);

const BUILTIN_KNOWLEDGE: &[KnowledgeRow] = &[
    (
        "binge_urges",
        &["binge", "urge", "craving", "overeat"],
        "Urges to binge are a normal part of recovery, and having one doesn't mean you're failing.",
        "Set a 15-minute timer and do something with your hands, like texting a friend or going for a short walk.",
        "If the urge is still there afterwards, eat a planned, satisfying snack slowly and without distractions.",
    ),
    (
        "body_image",
        &["body image", "mirror", "my body", "weight", "appearance"],
        "Hard body image days are painful, and they say more about how you feel than how you look.",
        "Write down three things your body did for you today that have nothing to do with how it looks.",
        "Take a break from mirrors and body-checking for the rest of the day.",
    ),
    (
        "meal_planning",
        &["meal plan", "meals", "skip", "regular eating", "snack"],
        "Eating regularly can feel hard at first, and it's one of the strongest foundations of recovery.",
        "Plan three meals and two to three snacks, spaced no more than three to four hours apart.",
        "Share your plan with your treatment team or someone you trust so it feels less lonely.",
    ),
    (
        "guilt_after_eating",
        &["guilt", "guilty", "compensate", "after eating"],
        "Feeling guilty after eating is really common, and it doesn't mean you did anything wrong.",
        "Remind yourself that food is fuel and care, not something you have to earn or make up for.",
        "Do something kind for yourself in the next hour instead of compensating.",
    ),
    (
        "anxiety_coping",
        &["anxiety", "anxious", "panic", "calm down"],
        "Anxiety can make food and everyday situations feel much scarier than they are.",
        "Try box breathing: in for 4, hold for 4, out for 4, hold for 4, repeated four times.",
        "Name the worry out loud or on paper, then write one thing you can control about it.",
    ),
    (
        "relapse",
        &["relapse", "setback", "slip", "lapse"],
        "Setbacks happen in almost every recovery, and they don't erase the progress you've made.",
        "Get back to your next planned meal or snack rather than waiting for a fresh start.",
        "Reach out to your support person or treatment team and let them know what happened.",
    ),
    (
        "social_eating",
        &["restaurant", "eating out", "party", "family dinner", "social"],
        "Eating around other people can bring up a lot of pressure and comparison.",
        "Look at the menu or plan what you'll eat ahead of time so there are fewer decisions in the moment.",
        "Pick one safe person to sit near and agree on a signal if you need a short break.",
    ),
    (
        "sleep",
        &["sleep", "insomnia", "tired", "exhausted"],
        "Poor sleep makes everything harder, including urges and low moods.",
        "Keep a steady wind-down routine and avoid screens for the last 30 minutes before bed.",
        "If your mind is racing, write your thoughts down so they're out of your head for the night.",
    ),
];

type VideoRow = (&'static str, &'static str);

const BUILTIN_VIDEOS: &[(VideoPurpose, &[VideoRow])] = &[
    (
        VideoPurpose::Calm,
        &[
            ("10-Minute Guided Meditation for Anxiety", "O-6f5wQXSu8"),
            ("Box Breathing to Calm Your Nervous System", "tEmt1Znux58"),
            ("5-4-3-2-1 Grounding Technique", "30VMIEmA114"),
        ],
    ),
    (
        VideoPurpose::Food,
        &[
            ("Making Peace with Food: Intuitive Eating Basics", "Q8ZRwjf3vpk"),
            ("How to Ride Out a Binge Urge", "G5xBgVPqYAo"),
            ("A Gentle Mindful Eating Practice", "l5BG-K1uH2s"),
        ],
    ),
    (
        VideoPurpose::Motivation,
        &[
            ("You Are Not Your Eating Disorder", "zI8rP8Pq8WE"),
            ("Recovery Is Not Linear", "Kt6yNnfVb1o"),
            ("Self-Compassion on Hard Days", "IvtZBUSplr4"),
        ],
    ),
];

// ============================================================================
// Tests
// ============================================================================
