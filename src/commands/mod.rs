pub mod cache;
pub mod cite;
pub mod init;
pub mod series;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cache::BookCache;
use crate::config::Config;

/// Load config from an explicit path or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
}

/// Open the book cache, with CLI path taking precedence over config
pub fn open_cache(config: &Config, cli_override: Option<&PathBuf>) -> Result<BookCache> {
    match config.cache_path(cli_override) {
        Some(path) => BookCache::open(&path),
        None => BookCache::open_default().context("Failed to open default book cache"),
    }
}
