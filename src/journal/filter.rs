//! Search and filter over the entry store.
//!
//! [`filter_entries`] applies a free-text term and a [`FilterConfig`] and
//! returns the matching entries in store order. [`quick_filters`] proposes a
//! few one-tap filter configurations for the current view.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::journal::types::{Entry, EntryType, Mood};

/// Most quick filters offered at once.
pub const MAX_QUICK_FILTERS: usize = 3;

/// Active search constraints. Constraints combine with AND; values inside
/// `types`, `moods`, and `tags` combine with OR. Empty means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub types: Vec<EntryType>,
    pub moods: Vec<Mood>,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`; empty for no lower bound.
    pub date_from: String,
    /// `YYYY-MM-DD`, inclusive through `23:59:59`; empty for no upper bound.
    pub date_to: String,
    pub has_media: bool,
}

impl FilterConfig {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A proposed filter with the configuration it would apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickFilter {
    pub id: &'static str,
    pub label: String,
    pub filters: FilterConfig,
}

/// Entries matching `search_term` and every constraint in `filters`, in
/// their original order.
///
/// Never fails: an unparseable date bound matches nothing.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    search_term: &str,
    filters: &FilterConfig,
) -> Vec<&'a Entry> {
    let needle = search_term.trim().to_lowercase();
    let from = lower_bound(&filters.date_from);
    let to = upper_bound(&filters.date_to);

    entries
        .iter()
        .filter(|entry| {
            matches_text(entry, &needle)
                && matches_type(entry, filters)
                && matches_mood(entry, filters)
                && matches_tags(entry, filters)
                && matches_from(entry, &from)
                && matches_to(entry, &to)
                && (!filters.has_media || entry.attachments.has_media())
        })
        .collect()
}

/// Parsed state of a date bound.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Open,
    At(NaiveDateTime),
    Invalid,
}

fn lower_bound(raw: &str) -> Bound {
    let raw = raw.trim();
    if raw.is_empty() {
        return Bound::Open;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Bound::At(date.and_time(NaiveTime::MIN));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(Bound::At)
        .unwrap_or(Bound::Invalid)
}

fn upper_bound(raw: &str) -> Bound {
    let raw = raw.trim();
    if raw.is_empty() {
        return Bound::Open;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(23, 59, 59)
            .map(Bound::At)
            .unwrap_or(Bound::Invalid),
        Err(_) => Bound::Invalid,
    }
}

fn matches_text(entry: &Entry, needle: &str) -> bool {
    needle.is_empty() || entry.search_haystack().contains(needle)
}

fn matches_type(entry: &Entry, filters: &FilterConfig) -> bool {
    filters.types.is_empty() || filters.types.contains(&entry.entry_type)
}

fn matches_mood(entry: &Entry, filters: &FilterConfig) -> bool {
    if filters.moods.is_empty() {
        return true;
    }
    entry.mood.is_some_and(|mood| filters.moods.contains(&mood))
}

fn matches_tags(entry: &Entry, filters: &FilterConfig) -> bool {
    filters.tags.is_empty() || entry.tags.iter().any(|tag| filters.tags.contains(tag))
}

// Bounds are wall-clock times in the entry's own offset.
fn matches_from(entry: &Entry, bound: &Bound) -> bool {
    match bound {
        Bound::Open => true,
        Bound::At(from) => entry.created_at.naive_local() >= *from,
        Bound::Invalid => false,
    }
}

fn matches_to(entry: &Entry, bound: &Bound) -> bool {
    match bound {
        Bound::Open => true,
        Bound::At(to) => entry.created_at.naive_local() <= *to,
        Bound::Invalid => false,
    }
}

/// Up to [`MAX_QUICK_FILTERS`] one-tap filters worth offering for `entries`
/// given what is already active.
pub fn quick_filters(
    entries: &[&Entry],
    filters: &FilterConfig,
    available_tags: &[String],
) -> Vec<QuickFilter> {
    let mut suggestions = Vec::new();

    if !filters.types.contains(&EntryType::Photo)
        && entries.iter().any(|e| e.entry_type == EntryType::Photo)
    {
        suggestions.push(QuickFilter {
            id: "photos",
            label: "Show photo memories".into(),
            filters: FilterConfig {
                types: vec![EntryType::Photo],
                ..filters.clone()
            },
        });
    }

    if !filters.moods.contains(&Mood::Joyful)
        && entries.iter().any(|e| e.mood == Some(Mood::Joyful))
    {
        suggestions.push(QuickFilter {
            id: "joyful",
            label: "Find joyful entries".into(),
            filters: FilterConfig {
                moods: vec![Mood::Joyful],
                ..filters.clone()
            },
        });
    }

    if let Some(tag) = available_tags.iter().find(|t| !filters.tags.contains(t)) {
        suggestions.push(QuickFilter {
            id: "tag",
            label: format!("Entries tagged #{tag}"),
            filters: FilterConfig {
                tags: vec![tag.clone()],
                ..filters.clone()
            },
        });
    }

    if !filters.has_media
        && entries
            .iter()
            .any(|e| e.attachments.has_images() || e.attachments.has_audio())
    {
        suggestions.push(QuickFilter {
            id: "media",
            label: "Entries with rich media".into(),
            filters: FilterConfig {
                has_media: true,
                ..filters.clone()
            },
        });
    }

    suggestions.truncate(MAX_QUICK_FILTERS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::{Attachments, MediaRef, Metrics};
    use chrono::DateTime;

    fn entry(id: &str, entry_type: EntryType, mood: Option<Mood>, created_at: &str, tags: &[&str]) -> Entry {
        Entry {
            id: id.into(),
            title: format!("Entry {id}"),
            entry_type,
            created_at: DateTime::parse_from_rfc3339(created_at).unwrap(),
            mood,
            sentiment: 0.5,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: None,
            content: String::new(),
            ai_follow_up: None,
            attachments: Attachments::default(),
            quote: None,
            location: None,
            weather: None,
            metrics: Metrics::default(),
            connected_to: vec![],
        }
    }

    fn ids<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_store_yields_nothing() {
        assert!(filter_entries(&[], "park", &FilterConfig::default()).is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_folded() {
        let mut a = entry("a", EntryType::Text, None, "2025-02-18T10:00:00Z", &["Family"]);
        a.location = Some("Prospect Park".into());
        let b = entry("b", EntryType::Text, None, "2025-02-17T10:00:00Z", &[]);
        let entries = vec![a, b];

        let result = filter_entries(&entries, "  PROSPECT ", &FilterConfig::default());
        assert_eq!(ids(&result), vec!["a"]);

        let result = filter_entries(&entries, "family", &FilterConfig::default());
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_search_does_not_span_missing_fields() {
        let mut a = entry("a", EntryType::Text, None, "2025-02-18T10:00:00Z", &[]);
        a.title = "Sunny".into();
        a.content = "day".into();
        let entries = vec![a];
        assert_eq!(filter_entries(&entries, "sunny day", &FilterConfig::default()).len(), 1);
        assert!(filter_entries(&entries, "sunnyday", &FilterConfig::default()).is_empty());
    }

    #[test]
    fn test_type_mood_and_tag_sets_are_or_combined() {
        let entries = vec![
            entry("a", EntryType::Photo, Some(Mood::Joyful), "2025-02-18T10:00:00Z", &["Food"]),
            entry("b", EntryType::Audio, Some(Mood::Curious), "2025-02-17T10:00:00Z", &["Work"]),
            entry("c", EntryType::Text, None, "2025-02-16T10:00:00Z", &["Travel"]),
        ];

        let filters = FilterConfig {
            types: vec![EntryType::Photo, EntryType::Audio],
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["a", "b"]);

        let filters = FilterConfig {
            moods: vec![Mood::Curious],
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["b"]);

        let filters = FilterConfig {
            tags: vec!["Travel".into(), "Food".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["a", "c"]);
    }

    #[test]
    fn test_date_bounds_are_inclusive_days() {
        let entries = vec![
            entry("late", EntryType::Text, None, "2025-02-15T23:59:30Z", &[]),
            entry("mid", EntryType::Text, None, "2025-02-14T12:00:00Z", &[]),
            entry("early", EntryType::Text, None, "2025-02-13T00:00:00Z", &[]),
        ];
        let filters = FilterConfig {
            date_from: "2025-02-14".into(),
            date_to: "2025-02-15".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["late", "mid"]);
    }

    #[test]
    fn test_date_bounds_use_entry_offset() {
        // 23:30 local on the 14th is already the 15th in UTC.
        let entries = vec![entry("e", EntryType::Text, None, "2025-02-14T23:30:00-05:00", &[])];
        let filters = FilterConfig {
            date_to: "2025-02-14".into(),
            ..Default::default()
        };
        assert_eq!(filter_entries(&entries, "", &filters).len(), 1);
    }

    #[test]
    fn test_date_from_accepts_time_of_day() {
        let entries = vec![
            entry("a", EntryType::Text, None, "2025-02-14T18:00:00Z", &[]),
            entry("b", EntryType::Text, None, "2025-02-14T08:00:00Z", &[]),
        ];
        let filters = FilterConfig {
            date_from: "2025-02-14T12:00".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["a"]);
    }

    #[test]
    fn test_malformed_dates_match_nothing() {
        let entries = vec![entry("a", EntryType::Text, None, "2025-02-14T18:00:00Z", &[])];
        for (from, to) in [("yesterday", ""), ("", "2025-13-40"), ("", "2025-02-14T10:00")] {
            let filters = FilterConfig {
                date_from: from.into(),
                date_to: to.into(),
                ..Default::default()
            };
            assert!(filter_entries(&entries, "", &filters).is_empty(), "{from:?} {to:?}");
        }
    }

    #[test]
    fn test_has_media_accepts_images_videos_or_audio() {
        let mut img = entry("img", EntryType::Photo, None, "2025-02-18T10:00:00Z", &[]);
        img.attachments.images.push(MediaRef::from("https://x.test/a.jpg"));
        let mut vid = entry("vid", EntryType::Video, None, "2025-02-17T10:00:00Z", &[]);
        vid.attachments.videos.push(MediaRef::from("https://x.test/a.mp4"));
        let mut aud = entry("aud", EntryType::Audio, None, "2025-02-16T10:00:00Z", &[]);
        aud.attachments.audio = Some(MediaRef::from("https://x.test/a.mp3"));
        let plain = entry("plain", EntryType::Text, None, "2025-02-15T10:00:00Z", &[]);
        let entries = vec![img, vid, aud, plain];

        let filters = FilterConfig {
            has_media: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&entries, "", &filters)), vec!["img", "vid", "aud"]);
    }

    #[test]
    fn test_quick_filters_cap_at_three_in_order() {
        let mut photo = entry("p", EntryType::Photo, Some(Mood::Joyful), "2025-02-18T10:00:00Z", &[]);
        photo.attachments.images.push(MediaRef::from("https://x.test/a.jpg"));
        let entries = vec![photo];
        let refs: Vec<&Entry> = entries.iter().collect();
        let tags = vec!["Family".to_string()];

        let quick = quick_filters(&refs, &FilterConfig::default(), &tags);
        let quick_ids: Vec<&str> = quick.iter().map(|q| q.id).collect();
        assert_eq!(quick_ids, vec!["photos", "joyful", "tag"]);
        assert_eq!(quick[2].label, "Entries tagged #Family");
        assert_eq!(quick[0].filters.types, vec![EntryType::Photo]);
    }

    #[test]
    fn test_quick_filters_skip_active_constraints() {
        let mut photo = entry("p", EntryType::Photo, Some(Mood::Joyful), "2025-02-18T10:00:00Z", &[]);
        photo.attachments.audio = Some(MediaRef::from("https://x.test/a.mp3"));
        let entries = vec![photo];
        let refs: Vec<&Entry> = entries.iter().collect();
        let active = FilterConfig {
            types: vec![EntryType::Photo],
            tags: vec!["Family".into()],
            ..Default::default()
        };

        let quick = quick_filters(&refs, &active, &["Family".to_string()]);
        let quick_ids: Vec<&str> = quick.iter().map(|q| q.id).collect();
        assert_eq!(quick_ids, vec!["joyful", "media"]);
        // existing constraints carry over
        assert_eq!(quick[1].filters.types, vec![EntryType::Photo]);
        assert!(quick[1].filters.has_media);
    }
}
