#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset};
use jotter::journal::types::{Attachments, MediaRef, Metrics};
use jotter::journal::{Entry, EntryType, Mood};

/// Fixed reference time: 2025-02-19 09:00 UTC.
pub fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-02-19T09:00:00Z").unwrap()
}

/// `now()` shifted back by whole days.
pub fn days_ago(days: i64) -> DateTime<FixedOffset> {
    now() - Duration::days(days)
}

/// Minimal text entry created at `created_at`.
pub fn entry(id: &str, created_at: DateTime<FixedOffset>) -> Entry {
    let content = format!("Entry {id} body");
    Entry {
        id: id.to_string(),
        title: format!("Entry {id}"),
        entry_type: EntryType::Text,
        created_at,
        mood: Some(Mood::Balanced),
        sentiment: 0.5,
        tags: Vec::new(),
        summary: None,
        metrics: Metrics::for_content(&content),
        content,
        ai_follow_up: None,
        attachments: Attachments::default(),
        quote: None,
        location: None,
        weather: None,
        connected_to: Vec::new(),
    }
}

pub fn with_tags(mut entry: Entry, tags: &[&str]) -> Entry {
    entry.tags = tags.iter().map(|t| t.to_string()).collect();
    entry
}

pub fn with_sentiment(mut entry: Entry, sentiment: f64) -> Entry {
    entry.sentiment = sentiment;
    entry
}

pub fn with_mood(mut entry: Entry, mood: Option<Mood>) -> Entry {
    entry.mood = mood;
    entry
}

pub fn with_image(mut entry: Entry, url: &str) -> Entry {
    entry.attachments.images.push(MediaRef::from(url.to_string()));
    entry
}

pub fn with_audio(mut entry: Entry, url: &str) -> Entry {
    entry.attachments.audio = Some(MediaRef::from(url.to_string()));
    entry
}

pub fn ids<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
    entries.into_iter().map(|e| e.id.as_str()).collect()
}
