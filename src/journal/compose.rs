//! Turning a draft into an entry.
//!
//! [`compose_entry`] is the single write path for new entries: it validates
//! the draft and computes every derived field (id, timestamp, normalized
//! sentiment, summary, metrics, follow-up prompt, sanitized attachments).

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Deserialize;

use crate::journal::error::JournalError;
use crate::journal::suggest::{
    default_sentiment, extract_entities, follow_up_prompt, suggest_tags, TagDraft,
};
use crate::journal::types::{Attachments, Entry, EntryType, MediaRef, Metrics, Mood, Quote};

/// Characters of content kept as the entry summary.
pub const SUMMARY_CHARS: usize = 160;

/// Form input for a new entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EntryDraft {
    pub title: String,
    pub entry_type: EntryType,
    pub mood: Option<Mood>,
    /// Sentiment as a percentage; clamped to 0–100.
    pub sentiment: f64,
    pub tags: Vec<String>,
    pub content: String,
    pub quote_text: String,
    pub quote_author: String,
    pub quote_context: String,
    pub image_urls: Vec<String>,
    pub audio_url: String,
    pub location: String,
    pub weather: String,
    pub ai_follow_up: String,
    /// `YYYY-MM-DD`; empty to use today.
    pub date: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        let mood = Some(Mood::Joyful);
        Self {
            title: String::new(),
            entry_type: EntryType::Text,
            mood,
            sentiment: default_sentiment(mood) as f64,
            tags: Vec::new(),
            content: String::new(),
            quote_text: String::new(),
            quote_author: String::new(),
            quote_context: String::new(),
            image_urls: Vec::new(),
            audio_url: String::new(),
            location: String::new(),
            weather: String::new(),
            ai_follow_up: String::new(),
            date: String::new(),
        }
    }
}

impl EntryDraft {
    /// Change the mood and reset the sentiment to that mood's default.
    pub fn set_mood(&mut self, mood: Option<Mood>) {
        self.mood = mood;
        self.sentiment = default_sentiment(mood) as f64;
    }

    /// Add `tag` if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        match self.tags.iter().position(|t| t == tag) {
            Some(i) => {
                self.tags.remove(i);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    pub fn suggested_tags(&self, limit: usize) -> Vec<String> {
        suggest_tags(
            &TagDraft {
                title: &self.title,
                content: &self.content,
                quote_text: &self.quote_text,
                entry_type: self.entry_type,
                selected_tags: &self.tags,
            },
            limit,
        )
    }

    pub fn entities(&self, limit: usize) -> Vec<String> {
        extract_entities(&self.content, limit)
    }
}

/// Build an entry from `draft` at time `now`.
pub fn compose_entry(draft: &EntryDraft, now: &DateTime<FixedOffset>) -> Result<Entry, JournalError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(JournalError::EmptyTitle);
    }

    let created_at = resolve_timestamp(&draft.date, now)?;
    let sentiment = draft.sentiment.clamp(0.0, 100.0).round() / 100.0;
    let content = draft.content.trim().to_string();

    let ai_follow_up = match draft.ai_follow_up.trim() {
        "" => follow_up_prompt(draft.entry_type).to_string(),
        custom => custom.to_string(),
    };

    let quote = (draft.entry_type == EntryType::Quote).then(|| Quote {
        text: draft.quote_text.trim().to_string(),
        author: non_empty(&draft.quote_author).unwrap_or_else(|| "Unknown".to_string()),
        context: draft.quote_context.trim().to_string(),
    });

    let entry = Entry {
        id: uuid::Uuid::now_v7().to_string(),
        title: title.to_string(),
        entry_type: draft.entry_type,
        created_at,
        mood: draft.mood,
        sentiment,
        tags: draft.tags.clone(),
        summary: Some(draft.content.chars().take(SUMMARY_CHARS).collect()),
        metrics: Metrics::for_content(&content),
        content,
        ai_follow_up: Some(ai_follow_up),
        attachments: Attachments {
            images: sanitize_urls(&draft.image_urls),
            videos: Vec::new(),
            audio: non_empty(&draft.audio_url).map(MediaRef::from),
        },
        quote,
        location: non_empty(&draft.location),
        weather: non_empty(&draft.weather),
        connected_to: Vec::new(),
    };

    tracing::debug!(id = %entry.id, entry_type = %entry.entry_type, "entry composed");
    Ok(entry)
}

/// The draft date at `now`'s wall-clock time and offset, or `now` itself.
fn resolve_timestamp(date: &str, now: &DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, JournalError> {
    let date = date.trim();
    if date.is_empty() {
        return Ok(*now);
    }
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| JournalError::InvalidDate(date.to_string()))?;
    now.timezone()
        .from_local_datetime(&day.and_time(now.time()))
        .single()
        .ok_or_else(|| JournalError::InvalidDate(date.to_string()))
}

/// Trimmed, non-empty, first occurrence only.
fn sanitize_urls(urls: &[String]) -> Vec<MediaRef> {
    let mut out: Vec<MediaRef> = Vec::new();
    for url in urls.iter().map(|u| u.trim()).filter(|u| !u.is_empty()) {
        let media = MediaRef::from(url);
        if !out.contains(&media) {
            out.push(media);
        }
    }
    out
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
