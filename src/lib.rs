//! Journaling companion: search, tag suggestions, and mood insights over an
//! in-memory journal.
//!
//! Entries (text, quotes, photos, video, audio, summaries) live in an
//! [`EntryStore`](journal::EntryStore) seeded from bundled fixtures. Three pure
//! engines derive every view from a snapshot of that store:
//!
//! | Engine | Entry points |
//! |--------|--------------|
//! | **Filter** | [`filter_entries`](journal::filter_entries), [`quick_filters`](journal::filter::quick_filters) |
//! | **Suggestions** | [`suggest_tags`](journal::suggest_tags), [`extract_entities`](journal::extract_entities) |
//! | **Analytics** | [`compute_analytics`](journal::compute_analytics) and the per-metric functions in [`journal::analytics`] |
//!
//! Nothing is persisted. Time-dependent computations take the current time as
//! an argument rather than reading a clock.
//!
//! # Modules
//!
//! - [`config`]: configuration loading from TOML files and environment variables
//! - [`journal`]: Data model, entry store, engines, profile, and application state

pub mod config;
pub mod journal;
