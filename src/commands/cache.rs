//! Cache command - inspect and clean cached book metadata

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::{load_config, open_cache};

/// List all cached records
pub fn list(config_path: Option<&Path>, cache_db: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let cache = open_cache(&config, cache_db)?;
    let entries = cache.list()?;

    if entries.is_empty() {
        println!("No cached books in {}", cache.path().display());
        return Ok(());
    }

    println!("Cached books in {}:", cache.path().display());
    println!();

    let max_age = config.cache_max_age()?;
    let now = chrono::Utc::now();
    for entry in &entries {
        let title = entry
            .book
            .as_ref()
            .and_then(|b| b.title.as_deref())
            .unwrap_or("(untitled)");
        let status = if entry.book.is_none() {
            " [unreadable]".red().to_string()
        } else if entry.is_expired(max_age, now) {
            " [expired]".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:>10}  {}  {}{}",
            entry.doc_id.cyan(),
            entry.cached_at.format("%Y-%m-%d"),
            title,
            status
        );
    }

    println!();
    println!("Total: {} record(s)", entries.len());

    Ok(())
}

/// Remove expired records
pub fn clean(config_path: Option<&Path>, cache_db: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let cache = open_cache(&config, cache_db)?;

    let removed = cache.prune(config.cache_max_age()?)?;
    println!("{} {} expired record(s) removed", "Done!".green().bold(), removed);

    Ok(())
}

/// Remove the record for one document
pub fn remove(config_path: Option<&Path>, cache_db: Option<&PathBuf>, doc_id: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let cache = open_cache(&config, cache_db)?;

    if cache.remove(doc_id)? {
        println!("{} Removed cached record for {}", "✓".green(), doc_id);
    } else {
        println!("No cached record for {}", doc_id);
    }

    Ok(())
}
