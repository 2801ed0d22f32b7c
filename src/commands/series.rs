use anyhow::Result;
use std::path::Path;

use crate::commands::load_config;

/// Run the series command - list known series abbreviations
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let table = config.series_abbreviations();

    println!("Known series abbreviations:");
    println!();

    for (name, abbrev) in table.entries() {
        println!("  {:<8} {}", abbrev, name);
    }

    println!();
    println!("Add more under [series] in the config file, e.g.:");
    println!("  \"Studies in Biblical Theology\" = \"SBT\"");

    Ok(())
}
