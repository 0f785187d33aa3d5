use anyhow::Result;
use serde::Serialize;

use jotter::config::JotterConfig;
use jotter::journal::profile::{Reminder, UserProfile};
use jotter::journal::Entry;

/// Export format, the same shape `data.entries_path` accepts.
#[derive(Debug, Serialize)]
struct ExportData<'a> {
    entries: &'a [Entry],
    reminders: &'a [Reminder],
    profile: &'a UserProfile,
}

/// Export entries, reminders, and profile as JSON to stdout.
pub fn export(config: &JotterConfig) -> Result<()> {
    let state = super::load_state(config)?;

    let data = ExportData {
        entries: state.store.entries(),
        reminders: &state.reminders,
        profile: &state.profile,
    };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} entries and {} reminders.",
        data.entries.len(),
        data.reminders.len()
    );

    Ok(())
}
