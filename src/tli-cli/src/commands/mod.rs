//! Command handlers for tli CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod helpers;
pub mod heroes;
pub mod idb;
pub mod recommend;
pub mod reference;
