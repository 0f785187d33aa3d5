use anyhow::{Context, Result};

use jotter::config::JotterConfig;
use jotter::journal::format::format_date_time;
use jotter::journal::profile::Preference;

/// Print the profile, preferences, and pending reminders.
pub fn profile(config: &JotterConfig, toggle: Option<&str>, json: bool) -> Result<()> {
    let mut state = super::load_state(config)?;

    if let Some(name) = toggle {
        let preference: Preference = name.parse().context("invalid --toggle")?;
        state.toggle_preference(preference);
    }

    if json {
        let out = serde_json::json!({
            "profile": &state.profile,
            "reminders": &state.reminders,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let profile = &state.profile;
    println!("{}", profile.name);
    println!("{}", "=".repeat(40));
    if let Some(ref role) = profile.role {
        println!("  Role:            {role}");
    }
    if let Some(ref location) = profile.location {
        println!("  Location:        {location}");
    }
    println!("  Streak:          {} days", profile.journaling_streak);
    if !profile.favorite_tags.is_empty() {
        println!("  Favorite tags:   {}", profile.favorite_tags.join(", "));
    }
    println!();

    println!("Preferences:");
    for preference in Preference::ALL {
        let mark = if profile.preferences.get(preference) { "on" } else { "off" };
        println!("  {:<24} {}", preference.title(), mark);
    }
    println!();

    println!("Reminders:");
    for reminder in &state.reminders {
        println!("  [{}] {}", reminder.category, reminder.title);
        println!("      due {}  ({})", format_date_time(&reminder.due_at), reminder.trigger);
    }

    Ok(())
}
