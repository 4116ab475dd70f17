//! Catalog database command CLI definitions

use clap::Subcommand;
use std::path::PathBuf;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum IdbCommand {
    /// Initialize the catalog database
    Init,

    /// Show database statistics
    Stats,

    /// Import a catalog JSON document
    Import {
        /// Path to the catalog JSON file
        file: PathBuf,
    },

    /// Export the catalog as JSON
    Export {
        /// Output file path
        file: PathBuf,
    },
}
