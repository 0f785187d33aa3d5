//! User profile, companion preferences, and smart reminders.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::journal::error::JournalError;
use crate::journal::types::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Streak recorded on the profile card; the live streak comes from analytics.
    #[serde(default)]
    pub journaling_streak: u32,
    #[serde(default)]
    pub favorite_tags: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl UserProfile {
    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        self.preferences.toggle(preference)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub ai_suggestions: bool,
    pub daily_reminders: bool,
    pub weekly_summary: bool,
    pub voice_to_text: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            ai_suggestions: true,
            daily_reminders: true,
            weekly_summary: true,
            voice_to_text: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    AiSuggestions,
    DailyReminders,
    WeeklySummary,
    VoiceToText,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Self::AiSuggestions,
        Self::DailyReminders,
        Self::WeeklySummary,
        Self::VoiceToText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiSuggestions => "ai_suggestions",
            Self::DailyReminders => "daily_reminders",
            Self::WeeklySummary => "weekly_summary",
            Self::VoiceToText => "voice_to_text",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::AiSuggestions => "AI Companion prompts",
            Self::DailyReminders => "Daily reminder",
            Self::WeeklySummary => "Weekly digest",
            Self::VoiceToText => "Voice-to-text capture",
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Preference {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| JournalError::UnknownPreference(s.to_string()))
    }
}

impl Preferences {
    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::AiSuggestions => self.ai_suggestions,
            Preference::DailyReminders => self.daily_reminders,
            Preference::WeeklySummary => self.weekly_summary,
            Preference::VoiceToText => self.voice_to_text,
        }
    }

    /// Flip `preference` and return its new value.
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let slot = match preference {
            Preference::AiSuggestions => &mut self.ai_suggestions,
            Preference::DailyReminders => &mut self.daily_reminders,
            Preference::WeeklySummary => &mut self.weekly_summary,
            Preference::VoiceToText => &mut self.voice_to_text,
        };
        *slot = !*slot;
        *slot
    }
}

/// A nudge to revisit something in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub trigger: String,
    pub due_at: DateTime<FixedOffset>,
    pub suggested_action: String,
    pub category: String,
}

impl Reminder {
    /// Follow-up reminder for a freshly created entry, due a day later.
    pub fn for_new_entry(entry: &Entry, now: &DateTime<FixedOffset>) -> Self {
        Self {
            id: format!("reminder-{}", entry.id),
            title: format!("Reflect on {}", entry.title),
            trigger: "New entry created just now".into(),
            due_at: *now + Duration::hours(24),
            suggested_action: "Check back tomorrow and add a follow-up note to see what evolved."
                .into(),
            category: "Reflection".into(),
        }
    }
}
