//! Command dispatch functions
//!
//! Breaks up the main match statement into focused dispatch functions.

use std::path::Path;

use anyhow::Result;

use crate::cli::*;
use crate::commands;

/// Dispatch catalog database subcommands
pub fn dispatch_idb(command: IdbCommand, db: &Path) -> Result<()> {
    match command {
        IdbCommand::Init => commands::idb::init(db),
        IdbCommand::Stats => commands::idb::stats(db),
        IdbCommand::Import { file } => commands::idb::import(db, &file).map(|_| ()),
        IdbCommand::Export { file } => commands::idb::export(db, &file),
    }
}

/// Dispatch reference subcommands
pub fn dispatch_reference(command: ReferenceCommand, knowledge_base: Option<&Path>) -> Result<()> {
    match command {
        ReferenceCommand::DamageTypes => {
            commands::reference::damage_types();
            Ok(())
        }
        ReferenceCommand::Talents => {
            let knowledge = commands::helpers::load_knowledge(knowledge_base)?;
            commands::reference::talents(&knowledge);
            Ok(())
        }
        ReferenceCommand::Talent { name } => {
            let knowledge = commands::helpers::load_knowledge(knowledge_base)?;
            commands::reference::talent(&knowledge, &name)
        }
        ReferenceCommand::Tags => {
            commands::reference::tags();
            Ok(())
        }
    }
}
