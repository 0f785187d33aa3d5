//! Insights over the entry store: streaks, sentiment, mood/tag/media
//! breakdowns, latest entries, and the mood trend curve.
//!
//! Everything here is a pure function of the entries passed in. Functions
//! that depend on the current day take `now` explicitly; calendar days are
//! taken in `now`'s timezone.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

use crate::journal::format::format_date;
use crate::journal::types::{reading_minutes, Entry};

/// Entries at or above this sentiment count as uplifting.
pub const POSITIVE_SENTIMENT: f64 = 0.7;

/// Knobs for [`compute_analytics`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsConfig {
    pub top_tags: usize,
    pub latest_limit: usize,
    pub trend_window: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_tags: 6,
            latest_limit: 4,
            trend_window: 10,
        }
    }
}

/// Entry counts per mood label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoodBreakdown {
    pub totals: HashMap<String, usize>,
    /// Descending by count; ties keep first-seen order.
    pub sorted: Vec<(String, usize)>,
}

impl MoodBreakdown {
    /// Percentage of counted entries carrying `label`; 0 for an empty breakdown.
    pub fn share(&self, label: &str) -> f64 {
        let total: usize = self.sorted.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return 0.0;
        }
        let count = self.totals.get(label).copied().unwrap_or(0);
        count as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Mutually exclusive media buckets. An entry with images counts as a photo
/// even when it also has audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaBreakdown {
    pub photos: usize,
    pub audio: usize,
    pub text_only: usize,
}

/// One point on the mood trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub entry_id: String,
    pub label: String,
    pub score: u32,
}

/// Aggregate insights for a snapshot of the store.
#[derive(Debug, Serialize)]
pub struct Insights<'a> {
    pub total_entries: usize,
    pub streak: u32,
    pub average_sentiment: f64,
    pub positive_entries: usize,
    /// Entries connected to at least one other entry.
    pub linked_entries: usize,
    pub total_word_count: usize,
    pub reflection_minutes: u32,
    pub mood_breakdown: MoodBreakdown,
    pub tag_frequency: Vec<TagCount>,
    pub media_breakdown: MediaBreakdown,
    pub latest_entries: Vec<&'a Entry>,
    pub trend_series: Vec<TrendPoint>,
}

/// Compute every insight for a snapshot of the store.
pub fn compute_analytics<'a, Tz: TimeZone>(
    entries: &'a [Entry],
    now: &DateTime<Tz>,
    config: &AnalyticsConfig,
) -> Insights<'a> {
    let total_word_count = entries.iter().map(|e| e.metrics.word_count).sum();

    Insights {
        total_entries: entries.len(),
        streak: calculate_streak(entries, now),
        average_sentiment: average_sentiment(entries),
        positive_entries: entries
            .iter()
            .filter(|e| e.sentiment >= POSITIVE_SENTIMENT)
            .count(),
        linked_entries: entries.iter().filter(|e| !e.connected_to.is_empty()).count(),
        total_word_count,
        reflection_minutes: reading_minutes(total_word_count),
        mood_breakdown: mood_breakdown(entries),
        tag_frequency: tag_frequency(entries, config.top_tags),
        media_breakdown: media_breakdown(entries),
        latest_entries: latest_entries(entries, config.latest_limit),
        trend_series: trend_series(entries, config.trend_window),
    }
}

/// Consecutive calendar days with at least one entry, counting back from
/// today. No entry today means a streak of 0.
pub fn calculate_streak<Tz: TimeZone>(entries: &[Entry], now: &DateTime<Tz>) -> u32 {
    let tz = now.timezone();
    let mut days: Vec<NaiveDate> = entries
        .iter()
        .map(|e| e.created_at.with_timezone(&tz).date_naive())
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let mut streak = 0;
    let mut expected = now.date_naive();
    for day in days {
        if day == expected {
            streak += 1;
            match expected.pred_opt() {
                Some(prev) => expected = prev,
                None => break,
            }
        } else if day < expected {
            break;
        }
        // days after `expected` are future-dated entries; skip them
    }
    streak
}

/// Mean sentiment rounded to two decimals; 0 for an empty store.
pub fn average_sentiment(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: f64 = entries.iter().map(|e| e.sentiment).sum();
    round2(sum / entries.len() as f64)
}

pub fn mood_breakdown(entries: &[Entry]) -> MoodBreakdown {
    let sorted = ranked_counts(entries.iter().map(|e| e.mood_label()));
    let totals = sorted.iter().cloned().collect();
    MoodBreakdown { totals, sorted }
}

/// Entries per tag, most frequent first, at most `top`.
pub fn tag_frequency(entries: &[Entry], top: usize) -> Vec<TagCount> {
    ranked_counts(entries.iter().flat_map(|e| e.tags.iter().map(String::as_str)))
        .into_iter()
        .take(top)
        .map(|(tag, count)| TagCount { tag, count })
        .collect()
}

pub fn media_breakdown(entries: &[Entry]) -> MediaBreakdown {
    entries.iter().fold(MediaBreakdown::default(), |mut acc, entry| {
        if entry.attachments.has_images() {
            acc.photos += 1;
        } else if entry.attachments.has_audio() {
            acc.audio += 1;
        } else {
            acc.text_only += 1;
        }
        acc
    })
}

/// The `limit` most recent entries, newest first. Entries with equal
/// timestamps keep store order.
pub fn latest_entries(entries: &[Entry], limit: usize) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Scores for the `window` most recent entries, oldest first.
pub fn trend_series(entries: &[Entry], window: usize) -> Vec<TrendPoint> {
    let mut timeline: Vec<&Entry> = entries.iter().collect();
    timeline.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    let start = timeline.len().saturating_sub(window);

    timeline[start..]
        .iter()
        .map(|entry| TrendPoint {
            entry_id: entry.id.clone(),
            label: format_date(&entry.created_at),
            score: trend_score(entry),
        })
        .collect()
}

/// Mood score, or the sentiment as a percentage when the entry has no mood.
pub fn trend_score(entry: &Entry) -> u32 {
    entry
        .mood
        .map(|m| m.trend_score())
        .unwrap_or_else(|| (entry.sentiment * 100.0).round() as u32)
}

/// SVG path for the filled trend area in a `width` × `height` box.
///
/// Consecutive points are joined with quadratic Bézier segments whose control
/// point sits half a step right of the previous point at its height; the
/// path is closed along the baseline. A single point becomes a triangle
/// from the baseline.
pub fn trend_path(scores: &[u32], width: f64, height: f64) -> String {
    if scores.is_empty() {
        return String::new();
    }

    let step = width / (scores.len().saturating_sub(1).max(1)) as f64;
    let coords: Vec<(f64, f64)> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| (i as f64 * step, height - (score as f64 * height) / 100.0))
        .collect();

    if let [(x, y)] = coords.as_slice() {
        return format!("M0 {height} L{x} {y} L{width} {height} Z");
    }

    let (x0, y0) = coords[0];
    let mut path = format!("M{x0},{y0}");
    for pair in coords.windows(2) {
        let (prev_x, prev_y) = pair[0];
        let (x, y) = pair[1];
        let control_x = prev_x + step / 2.0;
        path.push_str(&format!(" Q{control_x},{prev_y} {x},{y}"));
    }
    path.push_str(&format!(" L{width},{height} L0,{height} Z"));
    path
}

/// Count occurrences, then order by count descending keeping first-seen
/// order among ties.
fn ranked_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
