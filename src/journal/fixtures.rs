//! Seed data compiled into the binary.

use crate::journal::error::JournalError;
use crate::journal::profile::{Reminder, UserProfile};
use crate::journal::types::Entry;

const ENTRIES_JSON: &str = include_str!("../../fixtures/entries.json");
const REMINDERS_JSON: &str = include_str!("../../fixtures/reminders.json");
const PROFILE_JSON: &str = include_str!("../../fixtures/profile.json");

/// Sample journal entries, newest first.
pub fn seed_entries() -> Result<Vec<Entry>, JournalError> {
    Ok(serde_json::from_str(ENTRIES_JSON)?)
}

pub fn seed_reminders() -> Result<Vec<Reminder>, JournalError> {
    Ok(serde_json::from_str(REMINDERS_JSON)?)
}

pub fn seed_profile() -> Result<UserProfile, JournalError> {
    Ok(serde_json::from_str(PROFILE_JSON)?)
}
