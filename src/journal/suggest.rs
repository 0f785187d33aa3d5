//! Heuristic tag suggestions and entity extraction for entry drafts.
//!
//! Both are fixed rule tables, not language models. [`extract_entities`] in
//! particular only finds runs of capitalized words: sentence-initial words
//! ("Spent", "Visited") come back as entities and lowercase names are
//! missed. That is a known limitation of the heuristic.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::journal::types::{Entry, EntryType, Mood};

pub const DEFAULT_MAX_TAG_SUGGESTIONS: usize = 5;
pub const DEFAULT_MAX_ENTITIES: usize = 6;

/// Keyword rows in precedence order; a row fires when any keyword occurs.
const KEYWORD_TAGS: &[(&[&str], &[&str])] = &[
    (&["run", "yoga", "wellness", "health", "meditation"], &["Wellness", "Personal"]),
    (&["meeting", "sprint", "onboarding", "research", "pitch"], &["Work", "Ideas"]),
    (&["sketch", "design", "photo", "gallery", "art"], &["Creativity", "Photography"]),
    (&["family", "kids", "parent", "picnic"], &["Family", "Personal"]),
    (&["travel", "trip", "museum", "walk"], &["Travel"]),
    (&["cook", "recipe", "dinner", "curry"], &["Food"]),
];

const VOICE_NOTE_TAG: &str = "VoiceNote";

const ENTITY_STOP_WORDS: &[&str] = &["The", "And", "Your", "Today", "Yesterday", "Entry"];

static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)*\b").expect("capitalized run regex is invalid")
});

/// The parts of a draft the tag heuristic looks at.
#[derive(Debug, Clone, Copy)]
pub struct TagDraft<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub quote_text: &'a str,
    pub entry_type: EntryType,
    pub selected_tags: &'a [String],
}

/// Suggest up to `limit` tags for a draft, in keyword-table order, leaving
/// out tags the draft already has.
pub fn suggest_tags(draft: &TagDraft<'_>, limit: usize) -> Vec<String> {
    let haystack = format!("{} {} {}", draft.title, draft.content, draft.quote_text).to_lowercase();

    let mut candidates: Vec<&str> = Vec::new();
    for (keywords, tags) in KEYWORD_TAGS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            for tag in tags.iter() {
                if !candidates.contains(tag) {
                    candidates.push(*tag);
                }
            }
        }
    }

    if draft.entry_type == EntryType::Audio && !candidates.contains(&VOICE_NOTE_TAG) {
        candidates.push(VOICE_NOTE_TAG);
    }

    candidates
        .into_iter()
        .filter(|tag| !draft.selected_tags.iter().any(|s| s == tag))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Runs of capitalized words in `content`, first occurrence first, minus
/// common stop words, at most `limit`.
pub fn extract_entities(content: &str, limit: usize) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();
    for m in CAPITALIZED_RUN.find_iter(content) {
        let candidate = m.as_str();
        if ENTITY_STOP_WORDS.contains(&candidate) || entities.iter().any(|e| e == candidate) {
            continue;
        }
        entities.push(candidate.to_string());
        if entities.len() == limit {
            break;
        }
    }
    entities
}

/// Sentiment percentage a draft starts from for `mood`.
pub fn default_sentiment(mood: Option<Mood>) -> u32 {
    mood.map(|m| m.default_sentiment()).unwrap_or(60)
}

/// Companion question attached to a new entry when the author gave none.
pub fn follow_up_prompt(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Text => "What made this moment stand out today?",
        EntryType::Quote => "How does this quote connect to something you are working on?",
        EntryType::Photo => "What story does this image capture?",
        EntryType::Audio => "What do you want future-you to remember from this note?",
        EntryType::Summary => "What trend did you notice while looking back?",
        EntryType::Video => "Which moment in this clip do you want to remember?",
    }
}

/// Next-step ideas shown next to the companion conversation.
pub const PROMPT_IDEAS: [&str; 3] = [
    "Summarise today in three vivid sentences.",
    "Add a gratitude entry focused on relationships.",
    "Record a voice note while the details are fresh.",
];

pub const FALLBACK_TITLE: &str = "Capture a fresh reflection";
const FALLBACK_MOOD: Mood = Mood::Curious;
const FALLBACK_FOLLOW_UP: &str = "What is one small win from today that you want to remember?";
const GENERIC_FOLLOW_UP: &str = "Would you like me to suggest a prompt?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionRole {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionMessage {
    pub id: &'static str,
    pub role: CompanionRole,
    pub content: String,
}

/// Canned three-turn companion exchange about `entry`. Without an entry the
/// exchange is about a placeholder reflection.
pub fn companion_conversation(entry: Option<&Entry>) -> Vec<CompanionMessage> {
    let (title, mood, follow_up) = match entry {
        Some(e) => (
            e.title.as_str(),
            e.mood_label(),
            e.ai_follow_up.as_deref().filter(|f| !f.trim().is_empty()),
        ),
        None => (FALLBACK_TITLE, FALLBACK_MOOD.as_str(), Some(FALLBACK_FOLLOW_UP)),
    };

    vec![
        CompanionMessage {
            id: "c1",
            role: CompanionRole::Assistant,
            content: format!(
                "I noticed your entry \"{title}\" felt {}. {}",
                mood.to_lowercase(),
                follow_up.unwrap_or(GENERIC_FOLLOW_UP)
            ),
        },
        CompanionMessage {
            id: "c2",
            role: CompanionRole::User,
            content: "Yes, I want to go a little deeper into how the day unfolded.".into(),
        },
        CompanionMessage {
            id: "c3",
            role: CompanionRole::Assistant,
            content: "What moment shifted your energy the most? I can set a reminder to revisit it \
                      or help draft a follow-up entry."
                .into(),
        },
    ]
}
