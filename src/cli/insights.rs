use anyhow::Result;

use jotter::config::JotterConfig;
use jotter::journal::analytics::{trend_path, MoodBreakdown};
use jotter::journal::format::{format_date, format_reading_time};
use jotter::journal::store::GalleryKind;

const TREND_WIDTH: f64 = 320.0;
const TREND_HEIGHT: f64 = 120.0;

/// Print the analytics dashboard.
pub fn insights(config: &JotterConfig, json: bool) -> Result<()> {
    let state = super::load_state(config)?;
    let now = super::now();
    let insights = state.insights(&now, &config.insights.analytics());

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!("Journal Insights");
    println!("{}", "=".repeat(40));
    println!("  Entries:             {}", insights.total_entries);
    println!("  Streak:              {} days", insights.streak);
    println!(
        "  Average sentiment:   {:.0}%",
        insights.average_sentiment * 100.0
    );
    println!("  Positive entries:    {}", insights.positive_entries);
    println!("  Linked entries:      {}", insights.linked_entries);
    println!("  Words written:       {}", insights.total_word_count);
    println!(
        "  Reflection time:     {}",
        format_reading_time(insights.reflection_minutes)
    );
    println!();

    println!("Moods:");
    for (mood, count) in &insights.mood_breakdown.sorted {
        println!("{}", mood_line(mood, *count, &insights.mood_breakdown));
    }
    println!();

    println!("Top tags:");
    for tag in &insights.tag_frequency {
        println!("  #{:<16} {}", tag.tag, tag.count);
    }
    println!();

    let media = insights.media_breakdown;
    println!("Media:");
    println!("  {:<12} {}", "photos", media.photos);
    println!("  {:<12} {}", "audio", media.audio);
    println!("  {:<12} {}", "text only", media.text_only);
    println!();

    println!("Latest:");
    for entry in &insights.latest_entries {
        println!("  {}  {}", format_date(&entry.created_at), entry.title);
    }
    println!();

    println!("Mood trend:");
    for point in &insights.trend_series {
        println!("  {:<8} {:>3} {}", point.label, point.score, "#".repeat(point.score as usize / 5));
    }
    let scores: Vec<u32> = insights.trend_series.iter().map(|p| p.score).collect();
    if !scores.is_empty() {
        println!("  path: {}", trend_path(&scores, TREND_WIDTH, TREND_HEIGHT));
    }

    if let Some(spotlight) = state.store.quote_spotlight() {
        if let Some(ref quote) = spotlight.entry.quote {
            println!();
            println!("Quote spotlight:");
            println!("  \"{}\" - {}", quote.text, quote.author);
            for related in &spotlight.related {
                println!("    linked: {}", related.title);
            }
        }
    }

    let gallery = state.store.gallery(config.insights.gallery_limit);
    if !gallery.is_empty() {
        println!();
        println!("Gallery:");
        for item in &gallery {
            let kind = match item.kind {
                GalleryKind::Image => "image",
                GalleryKind::Video => "video",
            };
            println!("  {:<6} {}  ({})", kind, item.media, item.entry.title);
        }
    }

    Ok(())
}

/// `"  Joyful         2  (22%)"`; `share` is already a percentage.
fn mood_line(mood: &str, count: usize, breakdown: &MoodBreakdown) -> String {
    format!("  {:<12} {:>3}  ({:.0}%)", mood, count, breakdown.share(mood))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotter::journal::analytics::mood_breakdown;
    use jotter::journal::fixtures::seed_entries;

    #[test]
    fn test_mood_line_prints_share_as_percentage() {
        let entries = seed_entries().unwrap();
        let breakdown = mood_breakdown(&entries[..4]);
        let (mood, count) = &breakdown.sorted[0];
        let line = mood_line(mood, *count, &breakdown);
        assert!(line.trim_start().starts_with(mood.as_str()));
        assert!(line.ends_with(&format!("({:.0}%)", *count as f64 * 100.0 / 4.0)));
    }

    #[test]
    fn test_mood_shares_never_exceed_one_hundred_percent() {
        let entries = seed_entries().unwrap();
        let breakdown = mood_breakdown(&entries);
        for (mood, count) in &breakdown.sorted {
            let line = mood_line(mood, *count, &breakdown);
            let pct: f64 = line
                .rsplit('(')
                .next()
                .and_then(|s| s.strip_suffix("%)"))
                .and_then(|s| s.parse().ok())
                .unwrap();
            assert!(pct <= 100.0, "{line}");
        }
    }
}
