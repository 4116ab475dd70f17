//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up tli CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `database` - Optional catalog database path to set as default
/// * `knowledge_base` - Optional talent override file to set as default
/// * `show` - If true, show current configuration
pub fn handle(
    database: Option<PathBuf>,
    knowledge_base: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if database.is_none() && knowledge_base.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(path) = database {
        println!("Catalog database configured: {}", path.display());
        config.set_database(path);
    }
    if let Some(path) = knowledge_base {
        println!("Knowledge base configured: {}", path.display());
        config.set_knowledge_base(path);
    }
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }
    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.database {
        Some(path) => println!("Catalog database: {}", path.display()),
        None => println!("Catalog database: {} (default)", tli_idb::DEFAULT_DB_PATH),
    }
    match &config.knowledge_base {
        Some(path) => println!("Knowledge base:   {}", path.display()),
        None => println!("Knowledge base:   built-in"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: tli configure --set-database PATH");
    println!("   or: tli configure --set-knowledge-base PATH");
    println!("   or: tli configure --show");
    println!();
    println!("Note: --database and --knowledge-base on any command override these.");
}
