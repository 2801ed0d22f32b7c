use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::cache::DEFAULT_MAX_AGE_DAYS;
use crate::config::Config;

/// Run the init command - create a config file, asking for the default place
pub fn run(config_override: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match config_override {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    println!("{}", "sblcite configuration".bold());
    println!();
    println!(
        "This will create a config file at: {}",
        config_path.display().to_string().cyan()
    );
    println!();

    let place = prompt_place()?;

    write_config(&config_path, place.as_deref())?;

    println!();
    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("You can now use:");
    println!(
        "  {} - format citations for a book",
        "sblcite cite <book.json>".cyan()
    );
    println!(
        "  {} - list series abbreviations",
        "sblcite series".cyan()
    );

    Ok(())
}

fn write_config(path: &Path, place: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let place_line = match place {
        Some(p) => format!("place = {}", toml::Value::String(p.to_string())),
        None => "# place = \"Grand Rapids\"".to_string(),
    };

    let content = format!(
        r#"# sblcite configuration

[defaults]
# Place of publication used when a record has none
{}

[cache]
max_age_days = {}

# Extra series abbreviations, checked before the built-in list
# (see 'sblcite series')
[series]
# "Studies in Biblical Theology" = "SBT"
"#,
        place_line, DEFAULT_MAX_AGE_DAYS
    );

    std::fs::write(path, &content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

fn prompt_place() -> Result<Option<String>> {
    println!("Catalog records rarely include a place of publication.");
    print!("Default place of publication [{}]: ", "none".green());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    })
}
