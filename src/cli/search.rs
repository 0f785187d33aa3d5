use anyhow::{Context, Result};
use clap::Args;

use jotter::config::JotterConfig;
use jotter::journal::format::format_date;
use jotter::journal::{EntryType, FilterConfig, Mood};

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free-text term matched against title, content, summary, location, and tags
    #[arg(default_value = "")]
    pub term: String,
    /// Entry type (repeatable)
    #[arg(long = "type")]
    pub types: Vec<String>,
    /// Mood (repeatable)
    #[arg(long = "mood")]
    pub moods: Vec<String>,
    /// Tag (repeatable, case-sensitive)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Lower bound, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`
    #[arg(long = "from", default_value = "")]
    pub date_from: String,
    /// Upper bound, `YYYY-MM-DD` (inclusive through end of day)
    #[arg(long = "to", default_value = "")]
    pub date_to: String,
    /// Only entries with images, videos, or audio
    #[arg(long)]
    pub has_media: bool,
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn filters(&self) -> Result<FilterConfig> {
        let types = self
            .types
            .iter()
            .map(|t| t.parse::<EntryType>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid --type")?;
        let moods = self
            .moods
            .iter()
            .map(|m| m.parse::<Mood>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid --mood")?;

        Ok(FilterConfig {
            types,
            moods,
            tags: self.tags.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            has_media: self.has_media,
        })
    }
}

/// Filter the journal and print matching entries.
pub fn search(config: &JotterConfig, args: &SearchArgs) -> Result<()> {
    let mut state = super::load_state(config)?;
    state.set_search_term(args.term.as_str());
    state.set_filters(args.filters()?);

    let results = state.filtered_entries();
    tracing::debug!(term = %args.term, hits = results.len(), "search complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No entries match.");
    } else {
        println!("{} of {} entries", results.len(), state.store.len());
        println!("{}", "=".repeat(40));
        for entry in &results {
            super::print_entry_line(entry, &format_date(&entry.created_at));
        }
    }

    let quick = state.quick_filters();
    if !quick.is_empty() {
        println!();
        println!("Quick filters:");
        for filter in &quick {
            println!("  {:<10} {}", filter.id, filter.label);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse_types_and_moods() {
        let args = SearchArgs {
            types: vec!["photo".into()],
            moods: vec!["Joyful".into()],
            date_to: "2025-02-18".into(),
            ..Default::default()
        };
        let filters = args.filters().unwrap();
        assert_eq!(filters.types, vec![EntryType::Photo]);
        assert_eq!(filters.moods, vec![Mood::Joyful]);
        assert_eq!(filters.date_to, "2025-02-18");
    }

    #[test]
    fn test_filters_reject_unknown_type() {
        let args = SearchArgs {
            types: vec!["podcast".into()],
            ..Default::default()
        };
        assert!(args.filters().is_err());
    }
}
