//! Catalog Database Library for Torchlight Infinite
//!
//! This library provides a trait-based abstraction over the catalog the
//! recommendation engine reads: heroes, skills, items, talent nodes and
//! per-level talent effects. The SQLite implementation produces the
//! read-only [`tli::Catalog`] snapshot handed to the engine.
//!
//! # Features
//!
//! - `sqlite-sync` (default) - Synchronous SQLite using rusqlite (for CLI)
//!
//! # Example
//!
//! ```no_run
//! use tli_idb::{CatalogRepository, ImportExportRepository, SqliteDb};
//!
//! let db = SqliteDb::open("catalog.db").unwrap();
//! db.init().unwrap();
//! db.import_json(std::path::Path::new("share/catalog.json")).unwrap();
//!
//! let catalog = db.load_catalog().unwrap();
//! ```

pub mod repository;
pub mod shared;
pub mod types;

#[cfg(feature = "sqlite-sync")]
pub mod sqlite;

// Re-export types
pub use types::*;

// Re-export repository traits
pub use repository::{
    BulkResult, CatalogRepository, ImportExportRepository, RepoError, RepoResult,
};

// Re-export implementations
#[cfg(feature = "sqlite-sync")]
pub use sqlite::{SqliteDb, DEFAULT_DB_PATH};
