use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_MAX_AGE_DAYS;
use crate::citation::SeriesAbbreviations;

/// Application configuration loaded from ~/.config/sblcite/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    /// Extra series abbreviations, consulted before the built-in table
    #[serde(default)]
    pub series: BTreeMap<String, String>,
}

/// Values used when a metadata record leaves a field empty
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Place of publication (the catalog never records one)
    pub place: Option<String>,
}

/// Configuration for the book metadata cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Days before a cached record expires (default: 30)
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,

    /// Location of the cache database
    pub path: Option<PathBuf>,
}

fn default_max_age_days() -> i64 {
    DEFAULT_MAX_AGE_DAYS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/sblcite/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sblcite").join("config.toml"))
    }

    /// Get the place of publication, with CLI override taking precedence
    pub fn place(&self, cli_override: Option<&str>) -> Option<String> {
        cli_override
            .map(String::from)
            .or_else(|| self.defaults.place.clone())
    }

    /// Get the cache database path, with CLI override taking precedence
    pub fn cache_path(&self, cli_override: Option<&PathBuf>) -> Option<PathBuf> {
        cli_override.cloned().or_else(|| self.cache.path.clone())
    }

    /// Lifetime of cached records; negative values count as zero
    pub fn cache_max_age(&self) -> Result<chrono::Duration> {
        let days = self.cache.max_age_days.max(0);
        chrono::Duration::try_days(days)
            .with_context(|| format!("cache.max_age_days is out of range: {}", days))
    }

    pub fn series_abbreviations(&self) -> SeriesAbbreviations {
        SeriesAbbreviations::with_overrides(self.series.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.defaults.place.is_none());
        assert!(config.series.is_empty());
        assert_eq!(config.cache.max_age_days, 30);
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
place = "Grand Rapids"

[cache]
max_age_days = 7
path = "/tmp/sblcite/books.db"

[series]
"Studies in Biblical Theology" = "SBT"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.place, Some("Grand Rapids".to_string()));
        assert_eq!(config.cache.max_age_days, 7);
        assert_eq!(
            config.cache.path,
            Some(PathBuf::from("/tmp/sblcite/books.db"))
        );
        assert_eq!(
            config
                .series_abbreviations()
                .abbreviate("Studies in Biblical Theology Ser."),
            "SBT"
        );
    }

    #[test]
    fn test_invalid_config_returns_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[cache]\nmax_age_days = \"soon\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_cli_override() {
        let config = Config {
            defaults: DefaultsConfig {
                place: Some("Dallas".to_string()),
            },
            cache: CacheConfig {
                path: Some(PathBuf::from("/default/books.db")),
                ..Default::default()
            },
            series: BTreeMap::new(),
        };

        // CLI override takes precedence
        assert_eq!(config.place(Some("Waco")), Some("Waco".to_string()));
        assert_eq!(
            config.cache_path(Some(&PathBuf::from("/cli/books.db"))),
            Some(PathBuf::from("/cli/books.db"))
        );

        // Falls back to config when no CLI override
        assert_eq!(config.place(None), Some("Dallas".to_string()));
        assert_eq!(config.cache_path(None), Some(PathBuf::from("/default/books.db")));
    }

    #[test]
    fn test_negative_max_age_clamped() {
        let mut config = Config::default();
        config.cache.max_age_days = -5;
        assert_eq!(config.cache_max_age().unwrap(), chrono::Duration::zero());
    }

    #[test]
    fn test_huge_max_age_returns_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[cache]\nmax_age_days = 9223372036854775807\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let err = config.cache_max_age().unwrap_err();
        assert!(err.to_string().contains("max_age_days is out of range"));
    }
}
