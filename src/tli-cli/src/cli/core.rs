//! Core CLI definitions

use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::idb::{IdbCommand, OutputFormat};
use super::reference::ReferenceCommand;

#[derive(Parser)]
#[command(name = "tli")]
#[command(about = "Torchlight Infinite build recommendations", long_about = None)]
pub struct Cli {
    /// Catalog database (overrides the configured path)
    #[arg(long, global = true, env = "TLI_CATALOG_DB")]
    pub database: Option<PathBuf>,

    /// YAML file with talent profile overrides
    #[arg(long, global = true, env = "TLI_KNOWLEDGE_BASE")]
    pub knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend skills, items and talent nodes for a hero
    #[command(visible_alias = "r")]
    Recommend {
        /// Hero id from the catalog
        hero_id: i64,

        /// Preferred playstyle (e.g. "Melee", "Spell")
        #[arg(short, long)]
        playstyle: Option<String>,

        /// Content focus (e.g. "boss", "clear")
        #[arg(long)]
        focus: Option<String>,

        /// Number of skills to recommend
        #[arg(long, default_value_t = tli::recommend::DEFAULT_MAX_SKILLS,
              value_parser = clap::value_parser!(u16).range(1..=10).map(usize::from))]
        max_skills: usize,

        /// Number of items to recommend
        #[arg(long, default_value_t = tli::recommend::DEFAULT_MAX_ITEMS,
              value_parser = clap::value_parser!(u16).range(1..=20).map(usize::from))]
        max_items: usize,

        /// Number of talent nodes to recommend
        #[arg(long, default_value_t = tli::recommend::DEFAULT_MAX_TALENTS)]
        max_talents: usize,

        /// Condensed view using the smaller preset
        #[arg(short, long)]
        quick: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List heroes in the catalog
    #[command(visible_alias = "h")]
    Heroes {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Catalog database operations
    #[command(visible_alias = "db")]
    Idb {
        #[command(subcommand)]
        command: IdbCommand,
    },

    /// Browse built-in game mechanics reference data
    #[command(visible_alias = "ref")]
    Reference {
        #[command(subcommand)]
        command: ReferenceCommand,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default catalog database path
        #[arg(long = "set-database")]
        database: Option<PathBuf>,

        /// Set default knowledge base override file
        #[arg(long = "set-knowledge-base")]
        knowledge_base: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
