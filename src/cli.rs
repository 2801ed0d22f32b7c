use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sblcite")]
#[command(about = "Generate SBL-style citations from e-book catalog metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the config file (default: ~/.config/sblcite/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the book cache database
    #[arg(long, global = true)]
    pub cache_db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format SBL citations for a book
    Cite {
        /// Metadata file (.json or .toml), or - for JSON on stdin
        file: Option<PathBuf>,

        /// Catalog document ID; caches the record, or loads it when no file is given
        #[arg(long)]
        doc_id: Option<String>,

        /// First page cited
        #[arg(long)]
        start: Option<String>,

        /// Last page cited
        #[arg(long)]
        end: Option<String>,

        /// Print the HTML renderings instead of plain text
        #[arg(long)]
        html: bool,

        /// Output all renderings as JSON
        #[arg(long)]
        json: bool,

        /// Place of publication when the record has none
        #[arg(long)]
        place: Option<String>,
    },

    /// List known series abbreviations
    Series,

    /// Manage cached book metadata
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Create a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// List cached records
    List,

    /// Remove expired records
    Clean,

    /// Remove the record for one document
    Remove {
        /// Catalog document ID
        doc_id: String,
    },
}
