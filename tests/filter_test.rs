mod helpers;

use helpers::{days_ago, entry, ids, with_image, with_tags};
use jotter::journal::fixtures::seed_entries;
use jotter::journal::{filter_entries, EntryType, FilterConfig, Mood};

fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|f| f == id))
}

#[test]
fn filtering_is_idempotent() {
    let entries = seed_entries().unwrap();
    let filters = FilterConfig {
        moods: vec![Mood::Joyful, Mood::Inspired],
        ..Default::default()
    };
    let first = ids(filter_entries(&entries, "the", &filters));
    let second = ids(filter_entries(&entries, "the", &filters));
    assert_eq!(first, second);
}

#[test]
fn adding_a_constraint_never_grows_results() {
    let entries = seed_entries().unwrap();
    let open = filter_entries(&entries, "", &FilterConfig::default()).len();
    assert_eq!(open, entries.len());

    for entry_type in EntryType::ALL {
        let typed = FilterConfig {
            types: vec![entry_type],
            ..Default::default()
        };
        let narrowed = filter_entries(&entries, "", &typed).len();
        assert!(narrowed <= open);

        let with_media = FilterConfig {
            has_media: true,
            ..typed.clone()
        };
        assert!(filter_entries(&entries, "", &with_media).len() <= narrowed);
    }
}

#[test]
fn results_keep_store_order() {
    let entries = seed_entries().unwrap();
    let all = ids(&entries);
    for term in ["", "a", "run", "museum", "team"] {
        let hits = ids(filter_entries(&entries, term, &FilterConfig::default()));
        assert!(is_subsequence(&hits, &all), "term {term:?} reordered results");
    }
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let entries = vec![
        with_tags(entry("a", days_ago(0)), &["Wellness"]),
        entry("b", days_ago(1)),
    ];
    let hits = ids(filter_entries(&entries, "  WELLNESS ", &FilterConfig::default()));
    assert_eq!(hits, vec!["a"]);
}

#[test]
fn tag_filter_matches_any_selected_tag() {
    let entries = vec![
        with_tags(entry("a", days_ago(0)), &["Work"]),
        with_tags(entry("b", days_ago(1)), &["Family"]),
        with_tags(entry("c", days_ago(2)), &["work"]),
    ];
    let filters = FilterConfig {
        tags: vec!["Work".into(), "Family".into()],
        ..Default::default()
    };
    assert_eq!(ids(filter_entries(&entries, "", &filters)), vec!["a", "b"]);
}

#[test]
fn date_range_is_inclusive_through_end_of_day() {
    let entries = vec![
        entry("today", days_ago(0)),
        entry("yesterday", days_ago(1)),
        entry("old", days_ago(5)),
    ];
    let filters = FilterConfig {
        date_from: "2025-02-18".into(),
        date_to: "2025-02-18".into(),
        ..Default::default()
    };
    assert_eq!(ids(filter_entries(&entries, "", &filters)), vec!["yesterday"]);
}

#[test]
fn invalid_dates_match_nothing() {
    let entries = vec![entry("a", days_ago(0)), entry("b", days_ago(1))];
    for (from, to) in [("yesterday", ""), ("", "2025-13-40"), ("2025-02-18T25:00", "")] {
        let filters = FilterConfig {
            date_from: from.into(),
            date_to: to.into(),
            ..Default::default()
        };
        assert!(filter_entries(&entries, "", &filters).is_empty(), "{from:?}..{to:?}");
    }
}

#[test]
fn media_filter_requires_an_attachment() {
    let entries = vec![
        with_image(entry("pic", days_ago(0)), "https://x/1.jpg"),
        entry("plain", days_ago(1)),
    ];
    let filters = FilterConfig {
        has_media: true,
        ..Default::default()
    };
    assert_eq!(ids(filter_entries(&entries, "", &filters)), vec!["pic"]);
}
