use anyhow::Result;

use jotter::config::JotterConfig;
use jotter::journal::format::format_relative_day;

/// Print the journal, newest first.
pub fn log(config: &JotterConfig, limit: Option<usize>) -> Result<()> {
    let state = super::load_state(config)?;
    let now = super::now();
    let entries = state.store.entries();
    let shown = limit.unwrap_or(entries.len()).min(entries.len());

    println!("Journal ({} entries)", entries.len());
    println!("{}", "=".repeat(40));
    for entry in &entries[..shown] {
        super::print_entry_line(entry, &format_relative_day(&entry.created_at, &now));
    }
    if shown < entries.len() {
        println!();
        println!("  ... {} more", entries.len() - shown);
    }

    Ok(())
}
