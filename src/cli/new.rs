//! CLI `new` command: compose an entry into the session and print the result.
//!
//! The session is not persisted; pipe `jotter export` elsewhere to keep data.

use anyhow::{Context, Result};
use clap::Args;

use jotter::config::JotterConfig;
use jotter::journal::format::{format_date_time, format_sentiment};
use jotter::journal::{EntryDraft, Mood};

#[derive(Args, Debug, Default)]
pub struct NewArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub content: String,
    /// Entry type (text, quote, photo, video, audio, summary)
    #[arg(long = "type", default_value = "text")]
    pub entry_type: String,
    /// Mood; `none` for no mood
    #[arg(long)]
    pub mood: Option<String>,
    /// Sentiment percentage, 0-100 (defaults from the mood)
    #[arg(long)]
    pub sentiment: Option<f64>,
    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long, default_value = "")]
    pub quote: String,
    #[arg(long, default_value = "")]
    pub quote_author: String,
    #[arg(long, default_value = "")]
    pub quote_context: String,
    /// Image URL (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,
    #[arg(long, default_value = "")]
    pub audio: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub weather: String,
    #[arg(long, default_value = "")]
    pub follow_up: String,
    /// Entry date `YYYY-MM-DD`; defaults to today
    #[arg(long, default_value = "")]
    pub date: String,
    /// Also apply the suggested tags
    #[arg(long)]
    pub accept_suggestions: bool,
    #[arg(long)]
    pub json: bool,
}

impl NewArgs {
    pub fn draft(&self, suggestion_limit: usize) -> Result<EntryDraft> {
        let mut draft = EntryDraft {
            title: self.title.clone(),
            entry_type: self.entry_type.parse().context("invalid --type")?,
            content: self.content.clone(),
            quote_text: self.quote.clone(),
            quote_author: self.quote_author.clone(),
            quote_context: self.quote_context.clone(),
            image_urls: self.images.clone(),
            audio_url: self.audio.clone(),
            location: self.location.clone(),
            weather: self.weather.clone(),
            ai_follow_up: self.follow_up.clone(),
            date: self.date.clone(),
            ..Default::default()
        };

        match self.mood.as_deref() {
            None => {}
            Some(m) if m.eq_ignore_ascii_case("none") => draft.set_mood(None),
            Some(m) => draft.set_mood(Some(m.parse::<Mood>().context("invalid --mood")?)),
        }
        if let Some(sentiment) = self.sentiment {
            draft.sentiment = sentiment;
        }
        for tag in &self.tags {
            if !draft.tags.contains(tag) {
                draft.toggle_tag(tag);
            }
        }
        if self.accept_suggestions {
            for tag in draft.suggested_tags(suggestion_limit) {
                draft.toggle_tag(&tag);
            }
        }

        Ok(draft)
    }
}

pub fn new(config: &JotterConfig, args: &NewArgs) -> Result<()> {
    let mut state = super::load_state(config)?;
    let draft = args.draft(config.suggestions.max_tags)?;
    let now = super::now();

    let id = state
        .add_entry(&draft, &now)
        .context("failed to compose entry")?;
    let Some(entry) = state.store.get(&id) else {
        anyhow::bail!("composed entry {id} missing from store");
    };
    let reminder = &state.reminders[0];

    if args.json {
        let out = serde_json::json!({ "entry": entry, "reminder": reminder });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Created {} {}", entry.entry_type.icon(), entry.title);
    println!("{}", "=".repeat(40));
    println!("ID:        {}", entry.id);
    println!("Created:   {}", format_date_time(&entry.created_at));
    println!("Mood:      {}", entry.mood_label());
    println!("Sentiment: {}", format_sentiment(entry.sentiment));
    println!("Words:     {}", entry.metrics.word_count);
    if !entry.tags.is_empty() {
        println!("Tags:      {}", entry.tags.join(", "));
    }
    if let Some(ref follow_up) = entry.ai_follow_up {
        println!("Follow-up: {follow_up}");
    }

    let suggestions = draft.suggested_tags(config.suggestions.max_tags);
    if !suggestions.is_empty() {
        println!("Try tags:  {}", suggestions.join(", "));
    }
    let entities = draft.entities(config.suggestions.max_entities);
    if !entities.is_empty() {
        println!("Mentions:  {}", entities.join(", "));
    }

    println!();
    println!("Reminder:  {} (due {})", reminder.title, format_date_time(&reminder.due_at));
    println!("           {}", reminder.suggested_action);

    Ok(())
}
