//! The in-memory entry store.
//!
//! [`EntryStore`] owns the ordered entries, newest inserted first, and keeps
//! the invariants every view relies on: unique ids and valid entries.

use serde::Serialize;
use std::collections::HashSet;

use crate::journal::error::JournalError;
use crate::journal::types::{Entry, EntryType, MediaRef};

pub const DEFAULT_GALLERY_LIMIT: usize = 8;

/// Tags offered in every tag picker.
pub const DEFAULT_TAGS: &[&str] = &[
    "Personal",
    "Work",
    "Creativity",
    "Wellness",
    "Travel",
    "Family",
    "Ideas",
    "Reflection",
    "Food",
    "Photography",
    "Video",
    "VoiceNote",
];

/// An image or video shown in the media gallery, with the entry it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem<'a> {
    pub media: &'a MediaRef,
    pub kind: GalleryKind,
    pub entry: &'a Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryKind {
    Image,
    Video,
}

/// The first quote entry and the entries it points to.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSpotlight<'a> {
    pub entry: &'a Entry,
    pub related: Vec<&'a Entry>,
}

#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Build a store from entries in display order, validating each one.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, JournalError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(JournalError::DuplicateId(entry.id.clone()));
            }
        }
        tracing::debug!(count = entries.len(), "entry store loaded");
        Ok(Self { entries })
    }

    /// Insert a new entry at the head of the store.
    pub fn insert(&mut self, entry: Entry) -> Result<(), JournalError> {
        entry.validate()?;
        if self.get(&entry.id).is_some() {
            return Err(JournalError::DuplicateId(entry.id));
        }
        tracing::debug!(id = %entry.id, "entry inserted");
        self.entries.insert(0, entry);
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries listed in `id`'s `connected_to`, in that order. Ids that are
    /// not in the store are skipped.
    pub fn related(&self, id: &str) -> Vec<&Entry> {
        self.get(id)
            .map(|entry| self.resolve(&entry.connected_to))
            .unwrap_or_default()
    }

    fn resolve(&self, ids: &[String]) -> Vec<&Entry> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Images then videos of each entry in store order, at most `limit`.
    pub fn gallery(&self, limit: usize) -> Vec<GalleryItem<'_>> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let images = entry.attachments.images.iter().map(move |media| GalleryItem {
                    media,
                    kind: GalleryKind::Image,
                    entry,
                });
                let videos = entry.attachments.videos.iter().map(move |media| GalleryItem {
                    media,
                    kind: GalleryKind::Video,
                    entry,
                });
                images.chain(videos)
            })
            .take(limit)
            .collect()
    }

    pub fn quote_spotlight(&self) -> Option<QuoteSpotlight<'_>> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.entry_type == EntryType::Quote)?;
        Some(QuoteSpotlight {
            entry,
            related: self.resolve(&entry.connected_to),
        })
    }

    /// Default tags, the user's favourites, and every tag in use, sorted
    /// case-insensitively without duplicates.
    pub fn available_tags(&self, favorites: &[String]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let pool = DEFAULT_TAGS
            .iter()
            .map(|t| t.to_string())
            .chain(favorites.iter().cloned())
            .chain(self.entries.iter().flat_map(|e| e.tags.iter().cloned()));
        for tag in pool {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags.sort_by_key(|t| t.to_lowercase());
        tags
    }
}
