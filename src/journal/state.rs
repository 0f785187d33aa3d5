//! Application state owned by the front-end.
//!
//! [`JournalState`] holds the entry store together with reminders, the
//! profile, and the current search/filter selection. All updates go through
//! explicit methods; derived views are recomputed from the engines on demand.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::journal::analytics::{compute_analytics, AnalyticsConfig, Insights};
use crate::journal::compose::{compose_entry, EntryDraft};
use crate::journal::error::JournalError;
use crate::journal::filter::{filter_entries, quick_filters, FilterConfig, QuickFilter};
use crate::journal::fixtures;
use crate::journal::profile::{Preference, Reminder, UserProfile};
use crate::journal::store::EntryStore;
use crate::journal::types::Entry;

#[derive(Debug, Clone)]
pub struct JournalState {
    pub store: EntryStore,
    pub reminders: Vec<Reminder>,
    pub profile: UserProfile,
    search_term: String,
    filters: FilterConfig,
    selected_entry_id: Option<String>,
}

impl JournalState {
    pub fn new(store: EntryStore, reminders: Vec<Reminder>, profile: UserProfile) -> Self {
        let selected_entry_id = store.entries().first().map(|e| e.id.clone());
        Self {
            store,
            reminders,
            profile,
            search_term: String::new(),
            filters: FilterConfig::default(),
            selected_entry_id,
        }
    }

    /// State seeded from the bundled fixtures.
    pub fn seeded() -> Result<Self, JournalError> {
        let store = EntryStore::from_entries(fixtures::seed_entries()?)?;
        Ok(Self::new(
            store,
            fixtures::seed_reminders()?,
            fixtures::seed_profile()?,
        ))
    }

    /// Compose `draft`, put it at the head of the store, select it, and queue
    /// a follow-up reminder. Returns the new entry's id.
    pub fn add_entry(&mut self, draft: &EntryDraft, now: &DateTime<FixedOffset>) -> Result<String, JournalError> {
        let entry = compose_entry(draft, now)?;
        let reminder = Reminder::for_new_entry(&entry, now);
        let id = entry.id.clone();

        self.store.insert(entry)?;
        self.reminders.insert(0, reminder);
        self.selected_entry_id = Some(id.clone());
        tracing::info!(id = %id, total = self.store.len(), "entry added");
        Ok(id)
    }

    /// Select an entry by id. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.selected_entry_id = Some(id.to_string());
        true
    }

    /// The selected entry, falling back to the first entry when the
    /// selection is missing or stale.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_entry_id
            .as_deref()
            .and_then(|id| self.store.get(id))
            .or_else(|| self.store.entries().first())
    }

    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        let enabled = self.profile.toggle_preference(preference);
        tracing::debug!(preference = %preference, enabled, "preference toggled");
        enabled
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_filters(&mut self, filters: FilterConfig) {
        self.filters = filters;
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn available_tags(&self) -> Vec<String> {
        self.store.available_tags(&self.profile.favorite_tags)
    }

    pub fn filtered_entries(&self) -> Vec<&Entry> {
        filter_entries(self.store.entries(), &self.search_term, &self.filters)
    }

    /// Quick filters offered alongside the current result set.
    pub fn quick_filters(&self) -> Vec<QuickFilter> {
        quick_filters(&self.filtered_entries(), &self.filters, &self.available_tags())
    }

    pub fn insights<Tz: TimeZone>(&self, now: &DateTime<Tz>, config: &AnalyticsConfig) -> Insights<'_> {
        compute_analytics(self.store.entries(), now, config)
    }
}
