//! Loading shared by the catalog-reading commands

use anyhow::{bail, Context, Result};
use std::path::Path;
use tli::{Catalog, KnowledgeBase};
use tli_idb::{CatalogRepository, SqliteDb};

/// Open an existing catalog database. Never creates one.
pub fn open_catalog_db(db: &Path) -> Result<SqliteDb> {
    if !db.exists() {
        bail!(
            "Catalog database not found at {}. Run `tli idb init` and `tli idb import <FILE>` first.",
            db.display()
        );
    }
    SqliteDb::open(db).with_context(|| format!("Failed to open {}", db.display()))
}

/// Read the whole catalog snapshot from the database
pub fn load_catalog(db: &Path) -> Result<Catalog> {
    let wdb = open_catalog_db(db)?;
    wdb.load_catalog()
        .with_context(|| format!("Failed to read catalog from {}", db.display()))
}

/// Built-in knowledge base, with talent overrides applied when a file is given
pub fn load_knowledge(overrides: Option<&Path>) -> Result<KnowledgeBase> {
    match overrides {
        Some(path) => KnowledgeBase::load_with_overrides(path)
            .with_context(|| format!("Failed to load knowledge base from {}", path.display())),
        None => Ok(KnowledgeBase::builtin()),
    }
}
