use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("entry title must not be empty")]
    EmptyTitle,

    #[error("entry {id}: sentiment {value} is outside [0, 1]")]
    SentimentOutOfRange { id: String, value: f64 },

    #[error("entry {id}: quote must be present exactly when the entry type is quote")]
    QuoteMismatch { id: String },

    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown entry type: {0}")]
    UnknownEntryType(String),

    #[error("unknown mood: {0}")]
    UnknownMood(String),

    #[error("unknown preference: {0}")]
    UnknownPreference(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
