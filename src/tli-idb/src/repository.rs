//! Repository traits for catalog database operations.
//!
//! These traits define the interface for all database backends.

use std::path::Path;

use tli::{Catalog, Hero, Item, Skill, TalentLevel, TalentNode};

use crate::types::*;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Trait for catalog database operations (synchronous)
pub trait CatalogRepository {
    /// Initialize the database schema
    fn init(&self) -> RepoResult<()>;

    // === Records ===

    /// Add a hero. A positive id is kept, otherwise one is assigned.
    fn add_hero(&self, hero: &Hero) -> RepoResult<i64>;

    /// Add a skill
    fn add_skill(&self, skill: &Skill) -> RepoResult<i64>;

    /// Add an item
    fn add_item(&self, item: &Item) -> RepoResult<i64>;

    /// Add a talent tree node
    fn add_talent_node(&self, node: &TalentNode) -> RepoResult<i64>;

    /// Add a talent level effect. Missing mechanics are extracted from the
    /// effect text.
    fn add_talent_level(&self, level: &TalentLevel) -> RepoResult<()>;

    // === Queries ===

    /// Get a hero by id
    fn get_hero(&self, id: i64) -> RepoResult<Option<Hero>>;

    /// List heroes in id order
    fn list_heroes(&self) -> RepoResult<Vec<Hero>>;

    /// Level effects recorded for a talent, ordered by level
    fn talent_levels(&self, talent: &str) -> RepoResult<Vec<TalentLevel>>;

    // === Statistics ===

    /// Get database statistics
    fn stats(&self) -> RepoResult<DbStats>;

    // === Snapshot ===

    /// Read the whole catalog, every table in insertion order
    fn load_catalog(&self) -> RepoResult<Catalog>;
}

/// Extension trait for import/export operations
pub trait ImportExportRepository {
    /// Import every record of a catalog. Failed records are reported, not fatal.
    fn import_catalog(&self, catalog: &Catalog) -> RepoResult<BulkResult>;

    /// Import a catalog JSON document
    fn import_json(&self, path: &Path) -> RepoResult<BulkResult>;

    /// Export the catalog as a JSON document
    fn export_json(&self, path: &Path) -> RepoResult<()>;
}

/// Result of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkResult {
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<(String, String)>, // (record, error message)
}

impl BulkResult {
    pub fn record<T>(&mut self, label: impl FnOnce() -> String, result: RepoResult<T>) {
        match result {
            Ok(_) => self.succeeded += 1,
            Err(e) => {
                self.failed += 1;
                self.errors.push((label(), e.to_string()));
            }
        }
    }
}
