mod cli;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jotter::config::JotterConfig;

#[derive(Parser)]
#[command(name = "jotter", version, about = "Journaling companion: search, tag suggestions, and mood insights")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List entries, newest first
    Log {
        /// Maximum number of entries to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one entry with its connections
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Search and filter entries
    Search(cli::search::SearchArgs),
    /// Streak, mood, tag, media, and trend summaries
    Insights {
        #[arg(long)]
        json: bool,
    },
    /// Suggest tags for draft text
    Suggest(SuggestArgs),
    /// Extract capitalized names and places from text
    Entities {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Compose an entry into the session and print it with its reminder
    New(cli::new::NewArgs),
    /// Show the profile, optionally toggling a preference
    Profile {
        /// ai-suggestions, daily-reminders, weekly-summary, or voice-to-text
        #[arg(long)]
        toggle: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Dump entries, reminders, and profile as JSON to stdout
    Export,
}

#[derive(Args)]
struct SuggestArgs {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    content: String,
    #[arg(long, default_value = "")]
    quote: String,
    /// Entry type (text, quote, photo, video, audio, summary)
    #[arg(long = "type", default_value = "text")]
    entry_type: String,
    /// Already-selected tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = JotterConfig::load()?;

    // Log to stderr so stdout stays clean for --json and export output.
    let filter = EnvFilter::try_new(&config.log.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Log { limit } => cli::log::log(&config, limit)?,
        Command::Show { id, json } => cli::show::show(&config, &id, json)?,
        Command::Search(args) => cli::search::search(&config, &args)?,
        Command::Insights { json } => cli::insights::insights(&config, json)?,
        Command::Suggest(args) => cli::suggest::suggest(
            &config,
            &args.title,
            &args.content,
            &args.quote,
            &args.entry_type,
            &args.tags,
            args.json,
        )?,
        Command::Entities { text, json } => cli::suggest::entities(&config, &text, json)?,
        Command::New(args) => cli::new::new(&config, &args)?,
        Command::Profile { toggle, json } => cli::profile::profile(&config, toggle.as_deref(), json)?,
        Command::Export => cli::export::export(&config)?,
    }

    Ok(())
}
