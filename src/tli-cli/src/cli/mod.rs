//! CLI argument definitions for tli
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod idb;
mod reference;

pub use core::{Cli, Commands};
pub use idb::{IdbCommand, OutputFormat};
pub use reference::ReferenceCommand;
