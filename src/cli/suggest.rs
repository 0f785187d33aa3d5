//! CLI `suggest` and `entities` commands: run the suggestion engine over ad-hoc text.

use anyhow::{Context, Result};

use jotter::config::JotterConfig;
use jotter::journal::{extract_entities, suggest_tags, EntryType, TagDraft};

pub fn suggest(
    config: &JotterConfig,
    title: &str,
    content: &str,
    quote: &str,
    entry_type: &str,
    selected: &[String],
    json: bool,
) -> Result<()> {
    let entry_type: EntryType = entry_type.parse().context("invalid --type")?;
    let draft = TagDraft {
        title,
        content,
        quote_text: quote,
        entry_type,
        selected_tags: selected,
    };
    let tags = suggest_tags(&draft, config.suggestions.max_tags);

    if json {
        println!("{}", serde_json::to_string(&tags)?);
    } else if tags.is_empty() {
        println!("No tag suggestions.");
    } else {
        println!("Suggested tags:");
        for tag in &tags {
            println!("  #{tag}");
        }
    }

    Ok(())
}

pub fn entities(config: &JotterConfig, text: &str, json: bool) -> Result<()> {
    let found = extract_entities(text, config.suggestions.max_entities);

    if json {
        println!("{}", serde_json::to_string(&found)?);
    } else if found.is_empty() {
        println!("No entities found.");
    } else {
        println!("Entities:");
        for entity in &found {
            println!("  {entity}");
        }
    }

    Ok(())
}
