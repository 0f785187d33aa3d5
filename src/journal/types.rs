//! Core journal type definitions.
//!
//! Defines [`EntryType`] (the six kinds of entry), [`Mood`] (named moods with
//! their display and scoring tables), [`MediaRef`] and [`Attachments`], and
//! [`Entry`] (a full journal record).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::JournalError;

/// Number of words a reader gets through per minute.
pub const WORDS_PER_MINUTE: usize = 180;

/// The kind of content an entry captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Text,
    Quote,
    Photo,
    Video,
    Audio,
    Summary,
}

impl EntryType {
    pub const ALL: [EntryType; 6] = [
        Self::Text,
        Self::Quote,
        Self::Photo,
        Self::Video,
        Self::Audio,
        Self::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Quote => "quote",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Summary => "summary",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Quote => "Quote",
            Self::Photo => "Photo",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Summary => "Summary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Text => "📝",
            Self::Quote => "💬",
            Self::Photo => "📷",
            Self::Video => "🎬",
            Self::Audio => "🎧",
            Self::Summary => "🧾",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| JournalError::UnknownEntryType(s.to_string()))
    }
}

/// A named mood. Each mood carries an accent colour, a score on the trend
/// chart, and the sentiment percentage a new entry starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Joyful,
    Inspired,
    Thoughtful,
    Curious,
    Balanced,
    Energized,
    Motivated,
    Creative,
    Reflective,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Self::Joyful,
        Self::Inspired,
        Self::Thoughtful,
        Self::Curious,
        Self::Balanced,
        Self::Energized,
        Self::Motivated,
        Self::Creative,
        Self::Reflective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joyful => "Joyful",
            Self::Inspired => "Inspired",
            Self::Thoughtful => "Thoughtful",
            Self::Curious => "Curious",
            Self::Balanced => "Balanced",
            Self::Energized => "Energized",
            Self::Motivated => "Motivated",
            Self::Creative => "Creative",
            Self::Reflective => "Reflective",
        }
    }

    /// Display accent colour as a CSS hex string.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Joyful => "#60a5fa",
            Self::Inspired => "#f97316",
            Self::Thoughtful => "#a855f7",
            Self::Curious => "#34d399",
            Self::Balanced => "#facc15",
            Self::Energized => "#f87171",
            Self::Motivated => "#38bdf8",
            Self::Creative => "#c084fc",
            Self::Reflective => "#a3a3a3",
        }
    }

    /// Point on the 0–100 mood trend chart.
    pub fn trend_score(&self) -> u32 {
        match self {
            Self::Joyful => 88,
            Self::Inspired => 80,
            Self::Thoughtful => 60,
            Self::Curious => 72,
            Self::Balanced => 65,
            Self::Energized => 85,
            Self::Motivated => 82,
            Self::Creative => 86,
            Self::Reflective => 58,
        }
    }

    /// Sentiment percentage pre-filled when this mood is picked for a draft.
    pub fn default_sentiment(&self) -> u32 {
        match self {
            Self::Joyful => 80,
            Self::Inspired => 75,
            Self::Thoughtful => 55,
            Self::Curious => 60,
            Self::Balanced => 50,
            Self::Energized => 78,
            Self::Motivated => 70,
            Self::Creative => 72,
            Self::Reflective => 58,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| JournalError::UnknownMood(s.to_string()))
    }
}

/// Reference to a media attachment: either a URL or an inline `data:` blob.
///
/// Serialized as the plain string it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaRef {
    Url(String),
    Inline(String),
}

impl MediaRef {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(s) | Self::Inline(s) => s,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    /// MIME type declared by an inline blob (`data:image/png;base64,...`).
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Inline(s) => {
                let header = s.strip_prefix("data:")?.split(',').next()?;
                let mime = header.split(';').next()?;
                (!mime.is_empty()).then_some(mime)
            }
            Self::Url(_) => None,
        }
    }
}

impl From<String> for MediaRef {
    fn from(s: String) -> Self {
        if s.starts_with("data:") {
            Self::Inline(s)
        } else {
            Self::Url(s)
        }
    }
}

impl From<&str> for MediaRef {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<MediaRef> for String {
    fn from(media: MediaRef) -> Self {
        match media {
            MediaRef::Url(s) | MediaRef::Inline(s) => s,
        }
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Inline(_) => write!(f, "<inline {}>", self.mime_type().unwrap_or("data")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub images: Vec<MediaRef>,
    #[serde(default)]
    pub videos: Vec<MediaRef>,
    #[serde(default)]
    pub audio: Option<MediaRef>,
}

impl Attachments {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Any image, video, or audio attached.
    pub fn has_media(&self) -> bool {
        self.has_images() || !self.videos.is_empty() || self.has_audio()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub context: String,
}

/// Derived reading metrics for an entry's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub word_count: usize,
    pub reading_minutes: u32,
}

impl Metrics {
    pub fn for_content(content: &str) -> Self {
        let word_count = content.split_whitespace().count();
        Self {
            word_count,
            reading_minutes: reading_minutes(word_count),
        }
    }
}

/// `max(1, round(words / 180))`.
pub fn reading_minutes(word_count: usize) -> u32 {
    let minutes = (word_count as f64 / WORDS_PER_MINUTE as f64).round() as u32;
    minutes.max(1)
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique id; UUID v7 for entries created in-session.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Creation time. The stored offset is the entry's own timezone.
    pub created_at: DateTime<FixedOffset>,
    /// `None` when the source had no mood or one outside [`Mood::ALL`].
    #[serde(default, deserialize_with = "lenient_mood")]
    pub mood: Option<Mood>,
    /// Normalized positivity in `[0.0, 1.0]`.
    pub sentiment: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_follow_up: Option<String>,
    #[serde(default)]
    pub attachments: Attachments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub connected_to: Vec<String>,
}

impl Entry {
    /// Check the per-entry invariants: non-empty title, sentiment in range,
    /// and a quote present exactly for quote entries.
    pub fn validate(&self) -> Result<(), JournalError> {
        if self.title.trim().is_empty() {
            return Err(JournalError::EmptyTitle);
        }
        if !(0.0..=1.0).contains(&self.sentiment) {
            return Err(JournalError::SentimentOutOfRange {
                id: self.id.clone(),
                value: self.sentiment,
            });
        }
        if self.quote.is_some() != (self.entry_type == EntryType::Quote) {
            return Err(JournalError::QuoteMismatch { id: self.id.clone() });
        }
        Ok(())
    }

    /// Lower-cased text searched by the filter engine: title, content,
    /// summary, location, and space-joined tags.
    pub fn search_haystack(&self) -> String {
        let tags = self.tags.join(" ");
        [
            Some(self.title.as_str()),
            Some(self.content.as_str()),
            self.summary.as_deref(),
            self.location.as_deref(),
            Some(tags.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Mood label, or `"Unknown"` when the entry has none.
    pub fn mood_label(&self) -> &'static str {
        self.mood.map(|m| m.as_str()).unwrap_or("Unknown")
    }
}

fn lenient_mood<'de, D>(deserializer: D) -> Result<Option<Mood>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_round_trips_through_str() {
        for t in EntryType::ALL {
            assert_eq!(t.as_str().parse::<EntryType>().unwrap(), t);
        }
        assert!("podcast".parse::<EntryType>().is_err());
    }

    #[test]
    fn test_mood_parse_is_case_insensitive() {
        assert_eq!("joyful".parse::<Mood>().unwrap(), Mood::Joyful);
        assert_eq!("Reflective".parse::<Mood>().unwrap(), Mood::Reflective);
        assert!("Grumpy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_media_ref_detects_inline_blobs() {
        let url = MediaRef::from("https://example.com/a.jpg");
        let blob = MediaRef::from("data:image/png;base64,iVBORw0KGgo=");
        assert!(!url.is_inline());
        assert!(blob.is_inline());
        assert_eq!(blob.mime_type(), Some("image/png"));
        assert_eq!(blob.to_string(), "<inline image/png>");
        assert_eq!(url.to_string(), "https://example.com/a.jpg");
    }

    #[test]
    fn test_media_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&MediaRef::from("https://x.test/v.mp4")).unwrap();
        assert_eq!(json, "\"https://x.test/v.mp4\"");
    }

    #[test]
    fn test_metrics_count_whitespace_tokens() {
        let m = Metrics::for_content("  one two\tthree\nfour  ");
        assert_eq!(m.word_count, 4);
        assert_eq!(m.reading_minutes, 1);
        assert_eq!(reading_minutes(0), 1);
        assert_eq!(reading_minutes(450), 3);
    }

    #[test]
    fn test_unknown_mood_deserializes_to_none() {
        let json = r#"{
            "id": "x", "title": "T", "type": "text",
            "created_at": "2025-02-18T17:45:00Z",
            "mood": "Grumpy", "sentiment": 0.5
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, None);
        assert_eq!(entry.mood_label(), "Unknown");
    }

    #[test]
    fn test_validate_rejects_quote_mismatch() {
        let json = r#"{
            "id": "q", "title": "T", "type": "quote",
            "created_at": "2025-02-18T17:45:00Z", "sentiment": 0.5
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(matches!(entry.validate(), Err(JournalError::QuoteMismatch { .. })));
    }
}
