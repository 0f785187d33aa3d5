//! Display strings for dates, sentiment, and reading time.

use chrono::{DateTime, TimeZone};

/// `"Feb 18"` in the timestamp's own timezone.
pub fn format_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %d").to_string()
}

/// `"Feb 18 · 5:45 PM"`.
pub fn format_date_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} · {}", format_date(at), at.format("%-I:%M %p"))
}

/// `"Today"`, `"Yesterday"`, `"N days ago"` within a week, otherwise the
/// short date. Days are counted in `now`'s timezone.
pub fn format_relative_day<Tz1, Tz2>(target: &DateTime<Tz1>, now: &DateTime<Tz2>) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
    Tz1::Offset: std::fmt::Display,
{
    let target_day = target.with_timezone(&now.timezone()).date_naive();
    let diff_days = (now.date_naive() - target_day).num_days();
    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{diff_days} days ago"),
        _ => format_date(target),
    }
}

pub fn sentiment_to_emoji(score: f64) -> &'static str {
    if score >= 0.75 {
        "😄"
    } else if score >= 0.5 {
        "🙂"
    } else if score >= 0.25 {
        "😐"
    } else if score > 0.0 {
        "☁️"
    } else {
        "🌧️"
    }
}

/// `"82% positive"`.
pub fn format_sentiment(score: f64) -> String {
    format!("{}% positive", (score * 100.0).round() as i64)
}

pub fn format_reading_time(minutes: u32) -> String {
    format!("{minutes} min")
}
