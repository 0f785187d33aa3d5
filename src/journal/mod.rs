pub mod analytics;
pub mod compose;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod profile;
pub mod state;
pub mod store;
pub mod suggest;
pub mod types;

pub use analytics::{compute_analytics, AnalyticsConfig, Insights};
pub use compose::{compose_entry, EntryDraft};
pub use error::JournalError;
pub use filter::{filter_entries, FilterConfig};
pub use state::JournalState;
pub use store::EntryStore;
pub use suggest::{companion_conversation, extract_entities, suggest_tags, CompanionMessage, TagDraft};
pub use types::{Entry, EntryType, Mood};
