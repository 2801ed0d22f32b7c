use crate::metadata::BookMetadata;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors specific to decoding a metadata record
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Unsupported metadata format for {path:?} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid JSON metadata in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML metadata in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Read a metadata record from a .json or .toml file, or JSON from stdin when
/// the path is "-"
pub fn read_metadata(path: &Path) -> Result<BookMetadata> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read metadata from stdin")?;
        return Ok(parse_json(&content, "stdin")?);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if ext != "json" && ext != "toml" {
        return Err(MetadataError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;

    let origin = path.display().to_string();
    let book = if ext == "json" {
        parse_json(&content, &origin)?
    } else {
        parse_toml(&content, &origin)?
    };

    Ok(book)
}

pub fn parse_json(content: &str, origin: &str) -> Result<BookMetadata, MetadataError> {
    serde_json::from_str(content).map_err(|source| MetadataError::Json {
        origin: origin.to_string(),
        source,
    })
}

pub fn parse_toml(content: &str, origin: &str) -> Result<BookMetadata, MetadataError> {
    toml::from_str(content).map_err(|source| MetadataError::Toml {
        origin: origin.to_string(),
        source,
    })
}
