//! SQLite cache of book metadata keyed by catalog document ID
//!
//! Records scraped from a detail page are kept so that later views of the
//! same document (for example the reader) can cite it without re-scraping.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::metadata::{parse_json, BookMetadata};

const DB_FILENAME: &str = "books.db";

/// Default lifetime of a cached record
pub const DEFAULT_MAX_AGE_DAYS: i64 = 30;

/// Handle to the book cache database
pub struct BookCache {
    conn: Connection,
    path: PathBuf,
}

/// A cached record with its storage time
#[derive(Debug, Clone)]
pub struct CachedBook {
    pub doc_id: String,
    pub cached_at: DateTime<Utc>,
    pub book: Option<BookMetadata>,
}

impl CachedBook {
    /// Unreadable entries count as expired
    pub fn is_expired(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.book.is_none() || now - self.cached_at > max_age
    }
}

impl BookCache {
    /// Open or create the cache database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create cache directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open cache database at {:?}", path))?;

        let cache = Self {
            conn,
            path: path.to_path_buf(),
        };
        cache.init_schema()?;
        Ok(cache)
    }

    /// Open the cache in the user's cache directory
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Get the default cache database path
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
        Ok(cache_dir.join("sblcite").join(DB_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                doc_id TEXT PRIMARY KEY,
                book_json TEXT NOT NULL,
                cached_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Insert or replace the record for a document
    pub fn put(&self, doc_id: &str, book: &BookMetadata) -> Result<()> {
        self.put_at(doc_id, book, Utc::now())
    }

    fn put_at(&self, doc_id: &str, book: &BookMetadata, cached_at: DateTime<Utc>) -> Result<()> {
        let json = serde_json::to_string(book).context("Failed to serialize book metadata")?;

        self.conn.execute(
            r#"
            INSERT INTO books (doc_id, book_json, cached_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(doc_id) DO UPDATE SET
                book_json = excluded.book_json,
                cached_at = excluded.cached_at
            "#,
            params![doc_id, json, cached_at.to_rfc3339()],
        )?;

        debug!(doc_id, "Cached book metadata");
        Ok(())
    }

    /// Get the record for a document if it is younger than `max_age`.
    ///
    /// Expired or unreadable entries are removed.
    pub fn get(&self, doc_id: &str, max_age: Duration) -> Result<Option<BookMetadata>> {
        self.get_as_of(doc_id, max_age, Utc::now())
    }

    fn get_as_of(
        &self,
        doc_id: &str,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Result<Option<BookMetadata>> {
        let row = self
            .conn
            .query_row(
                "SELECT doc_id, book_json, cached_at FROM books WHERE doc_id = ?1",
                params![doc_id],
                Self::row_to_parts,
            )
            .optional()?;

        let Some(parts) = row else {
            return Ok(None);
        };
        let entry = Self::parts_to_entry(parts);

        if entry.is_expired(max_age, now) {
            debug!(doc_id, "Dropping expired or unreadable cache entry");
            self.remove(doc_id)?;
            return Ok(None);
        }

        Ok(entry.book)
    }

    /// Remove the record for a document, returning whether one existed
    pub fn remove(&self, doc_id: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM books WHERE doc_id = ?1", params![doc_id])?;
        Ok(count > 0)
    }

    /// List all cached records, newest first
    pub fn list(&self) -> Result<Vec<CachedBook>> {
        let mut stmt = self
            .conn
            .prepare("SELECT doc_id, book_json, cached_at FROM books ORDER BY cached_at DESC")?;

        let rows = stmt.query_map([], Self::row_to_parts)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Self::parts_to_entry(row?));
        }
        Ok(entries)
    }

    /// Remove expired and unreadable entries, returning the number removed
    pub fn prune(&self, max_age: Duration) -> Result<usize> {
        self.prune_as_of(max_age, Utc::now())
    }

    fn prune_as_of(&self, max_age: Duration, now: DateTime<Utc>) -> Result<usize> {
        let mut removed = 0;
        for entry in self.list()? {
            if entry.is_expired(max_age, now) && self.remove(&entry.doc_id)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn row_to_parts(row: &rusqlite::Row) -> rusqlite::Result<(String, String, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn parts_to_entry((doc_id, json, cached_at): (String, String, String)) -> CachedBook {
        let book = match parse_json(&json, &format!("cache entry {}", doc_id)) {
            Ok(book) => Some(book),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };

        // Unparseable timestamps fall back to the epoch, so they always expire
        let cached_at = DateTime::parse_from_rfc3339(&cached_at)
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or_default();

        CachedBook {
            doc_id,
            cached_at,
            book,
        }
    }
}
