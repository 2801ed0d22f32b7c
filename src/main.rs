mod cache;
mod citation;
mod cli;
mod commands;
mod config;
mod metadata;

use anyhow::Result;
use clap::Parser;
use cli::{CacheCommands, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "sblcite=debug"
    } else if quiet {
        "sblcite=error"
    } else {
        "sblcite=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Cite {
            file,
            doc_id,
            start,
            end,
            html,
            json,
            place,
        } => {
            commands::cite::run(&commands::cite::CiteOptions {
                file,
                doc_id,
                start,
                end,
                html,
                json,
                place,
                config: cli.config.clone(),
                cache_db: cli.cache_db.clone(),
            })?;
        }
        Commands::Series => {
            commands::series::run(config)?;
        }
        Commands::Cache { command } => match command {
            CacheCommands::List => commands::cache::list(config, cli.cache_db.as_ref())?,
            CacheCommands::Clean => commands::cache::clean(config, cli.cache_db.as_ref())?,
            CacheCommands::Remove { doc_id } => {
                commands::cache::remove(config, cli.cache_db.as_ref(), &doc_id)?
            }
        },
        Commands::Init { force } => {
            commands::init::run(config, force)?;
        }
    }

    Ok(())
}
