//! Catalog database command handlers

use anyhow::{Context, Result};
use std::path::Path;
use tli_idb::{BulkResult, CatalogRepository, CatalogTable, ImportExportRepository, SqliteDb};

use super::helpers;

/// Handle `idb init`
pub fn init(db: &Path) -> Result<()> {
    if let Some(parent) = db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let wdb = SqliteDb::open(db)?;
    wdb.init()?;
    println!("Your catalog database is ready at {}", db.display());
    Ok(())
}

/// Handle `idb stats`
pub fn stats(db: &Path) -> Result<()> {
    let wdb = helpers::open_catalog_db(db)?;
    let stats = wdb.stats()?;
    println!("Catalog Database Statistics");
    for table in CatalogTable::ALL {
        println!("  {:<14} {}", format!("{}:", table), stats.count(table));
    }
    Ok(())
}

/// Handle `idb import`. Initializes the database when needed.
pub fn import(db: &Path, file: &Path) -> Result<BulkResult> {
    if let Some(parent) = db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let wdb = SqliteDb::open(db)?;
    wdb.init()?;
    let result = wdb
        .import_json(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    println!(
        "Imported {} records from {} ({} failed)",
        result.succeeded,
        file.display(),
        result.failed
    );
    for (record, error) in &result.errors {
        eprintln!("  {}: {}", record, error);
    }
    Ok(result)
}

/// Handle `idb export`
pub fn export(db: &Path, file: &Path) -> Result<()> {
    let wdb = helpers::open_catalog_db(db)?;
    wdb.export_json(file)
        .with_context(|| format!("Failed to export to {}", file.display()))?;
    println!("Exported catalog to {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "heroes": [
            {"id": 1, "name": "Rehan", "god_type": "Berserker", "talent": "Anger"},
            {"id": 2, "name": "Rehan", "god_type": "Berserker", "talent": "Anger"}
        ],
        "skills": [
            {"id": 1, "name": "Whirlwind", "category": "Active", "tags": ["Melee", "Attack"]}
        ],
        "talent_levels": [
            {"talent_name": "Anger", "level": 60, "effect_name": "Fury",
             "effect_description": "-80% damage for non-Burst skills"}
        ]
    }"#;

    #[test]
    fn test_import_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("data").join("catalog.db");
        let input = dir.path().join("catalog.json");
        std::fs::write(&input, CATALOG_JSON).unwrap();

        let result = import(&db, &input).unwrap();
        assert_eq!(result.succeeded, 3);
        assert_eq!(result.failed, 1);

        let output = dir.path().join("out.json");
        export(&db, &output).unwrap();
        let exported: tli::Catalog =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(exported.heroes.len(), 1);
        assert!(exported.talent_levels[0]
            .mechanics
            .as_deref()
            .is_some_and(|m| m.contains("level_60_critical")));
    }

    #[test]
    fn test_init_and_stats() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("catalog.db");
        init(&db).unwrap();
        assert!(db.exists());
        stats(&db).unwrap();
    }

    #[test]
    fn test_stats_without_database() {
        let dir = tempfile::tempdir().unwrap();
        assert!(stats(&dir.path().join("none.db")).is_err());
    }
}
