pub mod export;
pub mod insights;
pub mod log;
pub mod new;
pub mod profile;
pub mod search;
pub mod show;
pub mod suggest;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;
use std::path::Path;

use jotter::config::JotterConfig;
use jotter::journal::fixtures;
use jotter::journal::profile::{Reminder, UserProfile};
use jotter::journal::{Entry, EntryStore, JournalState};

/// Same shape as `jotter export` output. Missing reminders or
/// profile fall back to the bundled fixtures.
#[derive(Debug, Deserialize)]
struct JournalFile {
    entries: Vec<Entry>,
    #[serde(default)]
    reminders: Option<Vec<Reminder>>,
    #[serde(default)]
    profile: Option<UserProfile>,
}

/// Current local time with its UTC offset.
pub fn now() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}

/// Build the session state from configured files or the bundled fixtures.
pub fn load_state(config: &JotterConfig) -> Result<JournalState> {
    let (store, reminders, file_profile) = match config.resolved_entries_path() {
        Some(path) => {
            let file = read_journal_file(&path)?;
            let store = EntryStore::from_entries(file.entries)
                .with_context(|| format!("invalid entries in {}", path.display()))?;
            let reminders = match file.reminders {
                Some(r) => r,
                None => fixtures::seed_reminders()?,
            };
            tracing::info!(path = %path.display(), entries = store.len(), "journal loaded");
            (store, reminders, file.profile)
        }
        None => {
            let store = EntryStore::from_entries(fixtures::seed_entries()?)?;
            tracing::debug!(entries = store.len(), "using bundled fixtures");
            (store, fixtures::seed_reminders()?, None)
        }
    };

    let profile = match (config.resolved_profile_path(), file_profile) {
        (Some(path), _) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read profile file: {}", path.display()))?;
            serde_json::from_str(&json).context("failed to parse profile JSON")?
        }
        (None, Some(profile)) => profile,
        (None, None) => fixtures::seed_profile()?,
    };

    Ok(JournalState::new(store, reminders, profile))
}

fn read_journal_file(path: &Path) -> Result<JournalFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read entries file: {}", path.display()))?;
    serde_json::from_str(&json).context("failed to parse entries JSON")
}

/// Truncate to `max` characters, appending `...` when cut.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// One-line listing used by `log` and `search`.
pub fn print_entry_line(entry: &Entry, when: &str) {
    println!(
        "  {} [{}] {} {} ({}, {})",
        entry.entry_type.icon(),
        entry.id,
        entry.title,
        when,
        entry.mood_label(),
        jotter::journal::format::format_sentiment(entry.sentiment),
    );
    let snippet = entry.summary.as_deref().unwrap_or(&entry.content);
    if !snippet.is_empty() {
        println!("     {}", preview(snippet, 72));
    }
    if !entry.tags.is_empty() {
        println!("     #{}", entry.tags.join(" #"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("ééééé", 2), "éé...");
    }

    #[test]
    fn test_load_state_reads_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        let entries = fixtures::seed_entries().unwrap();
        let json = serde_json::json!({ "entries": &entries[..2] });
        std::fs::write(&path, json.to_string()).unwrap();

        let mut config = JotterConfig::default();
        config.data.entries_path = Some(path.to_string_lossy().into_owned());

        let state = load_state(&config).unwrap();
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.reminders.len(), 3);
        assert_eq!(state.profile.name, "Avery Johnson");
    }

    #[test]
    fn test_load_state_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        let entries = fixtures::seed_entries().unwrap();
        let json = serde_json::json!({ "entries": [&entries[0], &entries[0]] });
        std::fs::write(&path, json.to_string()).unwrap();

        let mut config = JotterConfig::default();
        config.data.entries_path = Some(path.to_string_lossy().into_owned());
        assert!(load_state(&config).is_err());
    }
}
