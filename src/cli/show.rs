//! CLI `show` command: print a single entry with its attachments and connections.

use anyhow::{bail, Result};

use jotter::config::JotterConfig;
use jotter::journal::format::{format_date_time, format_reading_time, format_sentiment, sentiment_to_emoji};
use jotter::journal::suggest::{companion_conversation, CompanionRole, PROMPT_IDEAS};

pub fn show(config: &JotterConfig, id: &str, json: bool) -> Result<()> {
    let mut state = super::load_state(config)?;
    if !state.select(id) {
        bail!("entry not found: {id}");
    }
    let Some(entry) = state.selected_entry() else {
        bail!("entry not found: {id}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    println!("{} {}", entry.entry_type.icon(), entry.title);
    println!("{}", "=".repeat(40));
    println!("ID:        {}", entry.id);
    println!("Type:      {}", entry.entry_type.label());
    println!("Created:   {}", format_date_time(&entry.created_at));
    println!("Mood:      {}", entry.mood_label());
    println!(
        "Sentiment: {} {}",
        sentiment_to_emoji(entry.sentiment),
        format_sentiment(entry.sentiment)
    );
    println!(
        "Length:    {} words, {}",
        entry.metrics.word_count,
        format_reading_time(entry.metrics.reading_minutes)
    );
    if let Some(ref location) = entry.location {
        println!("Location:  {location}");
    }
    if let Some(ref weather) = entry.weather {
        println!("Weather:   {weather}");
    }
    if !entry.tags.is_empty() {
        println!("Tags:      {}", entry.tags.join(", "));
    }
    println!();

    if let Some(ref summary) = entry.summary {
        println!("Summary: {summary}");
        println!();
    }
    println!("{}", entry.content);

    if let Some(ref quote) = entry.quote {
        println!();
        println!("  \"{}\"", quote.text);
        println!("    - {}", quote.author);
        if !quote.context.is_empty() {
            println!("    ({})", quote.context);
        }
    }

    let attachments = &entry.attachments;
    if attachments.has_media() {
        println!();
        println!("Attachments:");
        for image in &attachments.images {
            println!("  image  {image}");
        }
        for video in &attachments.videos {
            println!("  video  {video}");
        }
        if let Some(ref audio) = attachments.audio {
            println!("  audio  {audio}");
        }
    }

    if let Some(ref follow_up) = entry.ai_follow_up {
        println!();
        println!("Follow-up: {follow_up}");
    }

    let related = state.store.related(&entry.id);
    if !related.is_empty() {
        println!();
        println!("Connected:");
        for other in related {
            println!("  [{}] {}", other.id, other.title);
        }
    }

    println!();
    println!("Companion:");
    for message in companion_conversation(Some(entry)) {
        let speaker = match message.role {
            CompanionRole::Assistant => "companion",
            CompanionRole::User => "you",
        };
        println!("  {:<10} {}", speaker, message.content);
    }
    println!();
    println!("Next steps:");
    for idea in PROMPT_IDEAS {
        println!("  - {idea}");
    }

    Ok(())
}
