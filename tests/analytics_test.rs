mod helpers;

use helpers::{days_ago, entry, now, with_audio, with_image, with_mood, with_sentiment, with_tags};
use jotter::journal::analytics::{
    average_sentiment, calculate_streak, media_breakdown, tag_frequency, trend_series, MediaBreakdown,
};
use jotter::journal::{compute_analytics, AnalyticsConfig, Mood};

#[test]
fn streak_stops_at_first_gap() {
    let entries = vec![
        entry("a", days_ago(0)),
        entry("b", days_ago(1)),
        entry("c", days_ago(3)),
    ];
    assert_eq!(calculate_streak(&entries, &now()), 2);
}

#[test]
fn streak_is_zero_without_an_entry_today() {
    let entries = vec![entry("a", days_ago(1)), entry("b", days_ago(2))];
    assert_eq!(calculate_streak(&entries, &now()), 0);
}

#[test]
fn streak_counts_each_day_once() {
    let entries = vec![
        entry("a", days_ago(0)),
        entry("b", days_ago(0)),
        entry("c", days_ago(1)),
    ];
    assert_eq!(calculate_streak(&entries, &now()), 2);
}

#[test]
fn average_sentiment_rounds_to_two_decimals() {
    let entries = vec![
        with_sentiment(entry("a", days_ago(0)), 0.2),
        with_sentiment(entry("b", days_ago(1)), 0.4),
        with_sentiment(entry("c", days_ago(2)), 0.6),
    ];
    assert_eq!(average_sentiment(&entries), 0.40);
}

#[test]
fn tag_frequency_breaks_ties_by_first_seen() {
    let entries = vec![
        with_tags(entry("a", days_ago(0)), &["A", "B"]),
        with_tags(entry("b", days_ago(1)), &["A"]),
        with_tags(entry("c", days_ago(2)), &["B", "C"]),
    ];
    let ranked: Vec<(String, usize)> = tag_frequency(&entries, 6)
        .into_iter()
        .map(|t| (t.tag, t.count))
        .collect();
    assert_eq!(
        ranked,
        vec![("A".into(), 2), ("B".into(), 2), ("C".into(), 1)]
    );
}

#[test]
fn images_take_precedence_over_audio() {
    let both = with_audio(with_image(entry("a", days_ago(0)), "https://x/1.jpg"), "https://x/1.mp3");
    let audio_only = with_audio(entry("b", days_ago(1)), "https://x/2.mp3");
    let plain = entry("c", days_ago(2));

    assert_eq!(
        media_breakdown(&[both, audio_only, plain]),
        MediaBreakdown {
            photos: 1,
            audio: 1,
            text_only: 1
        }
    );
}

#[test]
fn trend_series_is_oldest_first_and_windowed() {
    let entries = vec![
        with_mood(entry("new", days_ago(0)), Some(Mood::Joyful)),
        with_sentiment(with_mood(entry("mid", days_ago(1)), None), 0.73),
        with_mood(entry("old", days_ago(2)), Some(Mood::Reflective)),
    ];

    let series = trend_series(&entries, 2);
    let points: Vec<(&str, u32)> = series.iter().map(|p| (p.entry_id.as_str(), p.score)).collect();
    assert_eq!(points, vec![("mid", 73), ("new", 88)]);
}

#[test]
fn linked_entries_count_only_connected_ones() {
    let mut linked = entry("a", days_ago(0));
    linked.connected_to = vec!["b".into(), "c".into()];
    let entries = vec![linked, entry("b", days_ago(1)), entry("c", days_ago(2))];
    let insights = compute_analytics(&entries, &now(), &AnalyticsConfig::default());
    assert_eq!(insights.linked_entries, 1);
}

#[test]
fn empty_store_yields_zeroed_insights() {
    let insights = compute_analytics(&[], &now(), &AnalyticsConfig::default());
    assert_eq!(insights.total_entries, 0);
    assert_eq!(insights.streak, 0);
    assert_eq!(insights.average_sentiment, 0.0);
    assert!(insights.mood_breakdown.totals.is_empty());
    assert!(insights.mood_breakdown.sorted.is_empty());
    assert!(insights.tag_frequency.is_empty());
    assert_eq!(insights.media_breakdown, MediaBreakdown::default());
    assert!(insights.latest_entries.is_empty());
    assert!(insights.trend_series.is_empty());
}

#[test]
fn seeded_journal_insights_are_consistent() {
    let entries = jotter::journal::fixtures::seed_entries().unwrap();
    let config = AnalyticsConfig::default();
    let insights = compute_analytics(&entries, &now(), &config);

    assert_eq!(insights.total_entries, entries.len());
    assert_eq!(insights.linked_entries, 9);
    let media = insights.media_breakdown;
    assert_eq!(media.photos + media.audio + media.text_only, entries.len());
    let mood_total: usize = insights.mood_breakdown.sorted.iter().map(|(_, n)| n).sum();
    assert_eq!(mood_total, entries.len());
    assert!(insights.tag_frequency.len() <= config.top_tags);
    assert!(insights.latest_entries.len() <= config.latest_limit);
    assert!(insights
        .latest_entries
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    assert!(insights
        .trend_series
        .iter()
        .all(|p| p.score <= 100));
}
