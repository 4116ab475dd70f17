//! SQLite implementation using rusqlite (synchronous).
//!
//! This implementation is used by the CLI tool.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tli::{extract_level_mechanics, Catalog, Hero, Item, Skill, TalentLevel, TalentNode};

use crate::repository::*;
use crate::shared::{
    self, decode_string_list, encode_string_list, HERO_COLUMNS, ITEM_COLUMNS, SKILL_COLUMNS,
    TALENT_LEVEL_COLUMNS, TALENT_NODE_COLUMNS,
};
use crate::types::*;

/// Default database location
pub const DEFAULT_DB_PATH: &str = "share/catalog.db";

/// SQLite-backed catalog database
pub struct SqliteDb {
    conn: Connection,
}

fn db_err(e: rusqlite::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

/// Map an insert failure, reporting key collisions as duplicates
fn insert_err(e: rusqlite::Error, what: impl FnOnce() -> String) -> RepoError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepoError::Duplicate(what())
        }
        _ => db_err(e),
    }
}

/// Positive ids are kept, anything else lets SQLite assign one
fn explicit_id(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}

fn row_to_hero(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        god_type: row.get(2)?,
        talent: row.get(3)?,
        description: row.get(4)?,
    })
}

fn row_to_skill(row: &rusqlite::Row<'_>) -> rusqlite::Result<Skill> {
    let id: i64 = row.get(0)?;
    let tags = match row.get::<_, Option<String>>(4)?.as_deref().map(decode_string_list) {
        None => Vec::new(),
        Some(Ok(tags)) => tags,
        Some(Err(e)) => {
            tracing::warn!(skill_id = id, error = %e, "unparsable skill tags, treating as empty");
            Vec::new()
        }
    };
    Ok(Skill {
        id,
        name: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        tags,
        damage_type: row.get(5)?,
        cooldown: row.get(6)?,
        mana_cost: row.get(7)?,
    })
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        item_type: row.get(2)?,
        slot: row.get(3)?,
        rarity: row.get(4)?,
        stat_type: row.get(5)?,
        special_effects: row.get(6)?,
        set_name: row.get(7)?,
    })
}

fn row_to_talent_node(row: &rusqlite::Row<'_>) -> rusqlite::Result<TalentNode> {
    Ok(TalentNode {
        id: row.get(0)?,
        name: row.get(1)?,
        node_type: row.get(2)?,
        god_class: row.get(3)?,
        tier: row.get(4)?,
        effect: row.get(5)?,
    })
}

fn row_to_talent_level(row: &rusqlite::Row<'_>) -> rusqlite::Result<TalentLevel> {
    Ok(TalentLevel {
        talent_name: row.get(0)?,
        level: row.get(1)?,
        effect_name: row.get(2)?,
        effect_description: row.get(3)?,
        mechanics: row.get(4)?,
    })
}

impl SqliteDb {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    fn query_all<T>(
        &self,
        sql: &str,
        map: fn(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> RepoResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql).map_err(db_err)?;
        let rows = stmt.query_map([], map).map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn count(&self, table: CatalogTable) -> RepoResult<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(db_err)
    }
}

impl CatalogRepository for SqliteDb {
    fn init(&self) -> RepoResult<()> {
        for ddl in shared::schema::ALL {
            self.conn.execute_batch(ddl).map_err(db_err)?;
        }
        Ok(())
    }

    fn add_hero(&self, hero: &Hero) -> RepoResult<i64> {
        self.conn
            .execute(
                "INSERT INTO heroes (id, name, god_type, talent, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    explicit_id(hero.id),
                    hero.name,
                    hero.god_type,
                    hero.talent,
                    hero.description
                ],
            )
            .map_err(|e| insert_err(e, || format!("hero talent {}", hero.talent)))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_skill(&self, skill: &Skill) -> RepoResult<i64> {
        self.conn
            .execute(
                "INSERT INTO skills (id, name, category, description, tags, damage_type, cooldown, mana_cost)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    explicit_id(skill.id),
                    skill.name,
                    skill.category,
                    skill.description,
                    encode_string_list(&skill.tags),
                    skill.damage_type,
                    skill.cooldown,
                    skill.mana_cost
                ],
            )
            .map_err(|e| insert_err(e, || format!("skill id {}", skill.id)))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_item(&self, item: &Item) -> RepoResult<i64> {
        self.conn
            .execute(
                "INSERT INTO items (id, name, item_type, slot, rarity, stat_type, special_effects, set_name)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    explicit_id(item.id),
                    item.name,
                    item.item_type,
                    item.slot,
                    item.rarity,
                    item.stat_type,
                    item.special_effects,
                    item.set_name
                ],
            )
            .map_err(|e| insert_err(e, || format!("item id {}", item.id)))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_talent_node(&self, node: &TalentNode) -> RepoResult<i64> {
        self.conn
            .execute(
                "INSERT INTO talent_nodes (id, name, node_type, god_class, tier, effect)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    explicit_id(node.id),
                    node.name,
                    node.node_type,
                    node.god_class,
                    node.tier,
                    node.effect
                ],
            )
            .map_err(|e| insert_err(e, || format!("talent node id {}", node.id)))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_talent_level(&self, level: &TalentLevel) -> RepoResult<()> {
        let mechanics = match &level.mechanics {
            Some(raw) => raw.clone(),
            None => encode_string_list(&extract_level_mechanics(
                level.effect_description.as_deref().unwrap_or_default(),
                level.level,
            )),
        };
        self.conn
            .execute(
                "INSERT INTO talent_levels (talent_name, level, effect_name, effect_description, mechanics)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    level.talent_name,
                    level.level,
                    level.effect_name,
                    level.effect_description,
                    mechanics
                ],
            )
            .map_err(|e| {
                insert_err(e, || {
                    format!(
                        "talent level {} Lv{} {}",
                        level.talent_name, level.level, level.effect_name
                    )
                })
            })?;
        Ok(())
    }

    fn get_hero(&self, id: i64) -> RepoResult<Option<Hero>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM heroes WHERE id = ?1", HERO_COLUMNS),
                params![id],
                row_to_hero,
            )
            .optional()
            .map_err(db_err)
    }

    fn list_heroes(&self) -> RepoResult<Vec<Hero>> {
        self.query_all(
            &format!("SELECT {} FROM heroes ORDER BY id", HERO_COLUMNS),
            row_to_hero,
        )
    }

    fn talent_levels(&self, talent: &str) -> RepoResult<Vec<TalentLevel>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM talent_levels WHERE talent_name = ?1 ORDER BY level, rowid",
                TALENT_LEVEL_COLUMNS
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![talent], row_to_talent_level)
            .map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn stats(&self) -> RepoResult<DbStats> {
        Ok(DbStats {
            hero_count: self.count(CatalogTable::Heroes)?,
            skill_count: self.count(CatalogTable::Skills)?,
            item_count: self.count(CatalogTable::Items)?,
            talent_node_count: self.count(CatalogTable::TalentNodes)?,
            talent_level_count: self.count(CatalogTable::TalentLevels)?,
        })
    }

    fn load_catalog(&self) -> RepoResult<Catalog> {
        let catalog = Catalog {
            heroes: self.list_heroes()?,
            skills: self.query_all(
                &format!("SELECT {} FROM skills ORDER BY id", SKILL_COLUMNS),
                row_to_skill,
            )?,
            items: self.query_all(
                &format!("SELECT {} FROM items ORDER BY id", ITEM_COLUMNS),
                row_to_item,
            )?,
            talent_nodes: self.query_all(
                &format!("SELECT {} FROM talent_nodes ORDER BY id", TALENT_NODE_COLUMNS),
                row_to_talent_node,
            )?,
            talent_levels: self.query_all(
                &format!("SELECT {} FROM talent_levels ORDER BY rowid", TALENT_LEVEL_COLUMNS),
                row_to_talent_level,
            )?,
        };
        tracing::debug!(
            heroes = catalog.heroes.len(),
            skills = catalog.skills.len(),
            items = catalog.items.len(),
            "loaded catalog snapshot"
        );
        Ok(catalog)
    }
}

impl ImportExportRepository for SqliteDb {
    fn import_catalog(&self, catalog: &Catalog) -> RepoResult<BulkResult> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        let mut result = BulkResult::default();

        for hero in &catalog.heroes {
            result.record(|| format!("hero {}", hero.name), self.add_hero(hero));
        }
        for skill in &catalog.skills {
            result.record(|| format!("skill {}", skill.name), self.add_skill(skill));
        }
        for item in &catalog.items {
            result.record(|| format!("item {}", item.name), self.add_item(item));
        }
        for node in &catalog.talent_nodes {
            result.record(
                || format!("talent node {}", node.name),
                self.add_talent_node(node),
            );
        }
        for level in &catalog.talent_levels {
            result.record(
                || format!("talent level {} Lv{}", level.talent_name, level.level),
                self.add_talent_level(level),
            );
        }

        tx.commit().map_err(db_err)?;
        tracing::info!(
            succeeded = result.succeeded,
            failed = result.failed,
            "catalog import finished"
        );
        Ok(result)
    }

    fn import_json(&self, path: &Path) -> RepoResult<BulkResult> {
        let json = std::fs::read_to_string(path)?;
        let catalog: Catalog =
            serde_json::from_str(&json).map_err(|e| ParseError::InvalidCatalog(e.to_string()))?;
        self.import_catalog(&catalog)
    }

    fn export_json(&self, path: &Path) -> RepoResult<()> {
        let catalog = self.load_catalog()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(&catalog).map_err(|e| RepoError::Database(e.to_string()))?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "catalog exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> SqliteDb {
        let db = SqliteDb::open_in_memory().unwrap();
        db.init().unwrap();
        db
    }

    fn hero(id: i64, name: &str, god_type: &str, talent: &str) -> Hero {
        Hero {
            id,
            name: name.to_string(),
            god_type: god_type.to_string(),
            talent: talent.to_string(),
            description: None,
        }
    }

    fn level(talent: &str, lv: i32, name: &str, desc: &str) -> TalentLevel {
        TalentLevel {
            talent_name: talent.to_string(),
            level: lv,
            effect_name: name.to_string(),
            effect_description: Some(desc.to_string()),
            mechanics: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            heroes: vec![hero(1, "Rehan", "Berserker", "Anger")],
            skills: vec![
                Skill {
                    id: 1,
                    name: "Leap Slam".to_string(),
                    category: "Active Skill".to_string(),
                    tags: vec!["Melee".to_string(), "Attack".to_string()],
                    damage_type: Some("Physical".to_string()),
                    ..Default::default()
                },
                Skill {
                    id: 2,
                    name: "Frost Nova".to_string(),
                    category: "Active Skill".to_string(),
                    tags: vec!["Spell".to_string()],
                    damage_type: Some("Cold".to_string()),
                    ..Default::default()
                },
            ],
            items: vec![Item {
                id: 1,
                name: "Berserker Helm".to_string(),
                item_type: "Helmet".to_string(),
                slot: "Head".to_string(),
                rarity: "Legendary".to_string(),
                stat_type: Some("STR".to_string()),
                special_effects: Some("+10% Attack Speed".to_string()),
                set_name: None,
            }],
            talent_nodes: vec![TalentNode {
                id: 1,
                name: "Warlord".to_string(),
                node_type: "Core".to_string(),
                ..Default::default()
            }],
            talent_levels: vec![level(
                "Anger",
                60,
                "Tunnel Vision",
                "-80% damage for non-Burst skills",
            )],
        }
    }

    #[test]
    fn test_init_creates_tables() {
        let db = setup_db();
        assert_eq!(db.stats().unwrap(), DbStats::default());
        // init is idempotent
        db.init().unwrap();
    }

    #[test]
    fn test_add_and_get_hero() {
        let db = setup_db();
        let id = db.add_hero(&hero(7, "Carino", "Divineshot", "Ranger of Glory")).unwrap();
        assert_eq!(id, 7);
        let loaded = db.get_hero(7).unwrap().unwrap();
        assert_eq!(loaded.talent, "Ranger of Glory");
        assert!(db.get_hero(8).unwrap().is_none());

        let assigned = db.add_hero(&hero(0, "Gemma", "Mage", "Frostbitten Heart")).unwrap();
        assert_eq!(assigned, 8);
    }

    #[test]
    fn test_duplicate_talent_errors() {
        let db = setup_db();
        db.add_hero(&hero(1, "Rehan", "Berserker", "Anger")).unwrap();
        let err = db.add_hero(&hero(2, "Other", "Berserker", "Anger")).unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[test]
    fn test_item_slot_required() {
        let db = setup_db();
        let result = db.conn.execute(
            "INSERT INTO items (name, item_type, rarity) VALUES ('Ring', 'Ring', 'Rare')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_skill_tags_round_trip_and_fallback() {
        let db = setup_db();
        db.import_catalog(&sample_catalog()).unwrap();
        db.conn
            .execute(
                "INSERT INTO skills (name, category, tags) VALUES ('Broken', 'Passive', 'Melee, Attack')",
                [],
            )
            .unwrap();

        let catalog = db.load_catalog().unwrap();
        assert_eq!(catalog.skills[0].tags, vec!["Melee", "Attack"]);
        assert_eq!(catalog.skills[2].name, "Broken");
        assert!(catalog.skills[2].tags.is_empty());
    }

    #[test]
    fn test_level_mechanics_extracted_on_insert() {
        let db = setup_db();
        db.add_talent_level(&level("Anger", 60, "Tunnel Vision", "-80% damage for non-Burst skills"))
            .unwrap();
        let mut explicit = level("Anger", 8, "Fury", "+10% Rage");
        explicit.mechanics = Some(r#"["rage"]"#.to_string());
        db.add_talent_level(&explicit).unwrap();

        let levels = db.talent_levels("Anger").unwrap();
        assert_eq!(levels[0].level, 8);
        assert_eq!(levels[0].mechanics.as_deref(), Some(r#"["rage"]"#));
        let mechs = decode_string_list(levels[1].mechanics.as_deref().unwrap()).unwrap();
        assert!(mechs.contains(&"damage_penalty".to_string()));
        assert!(mechs.contains(&"level_60_critical".to_string()));
    }

    #[test]
    fn test_level_composite_key() {
        let db = setup_db();
        db.add_talent_level(&level("Anger", 60, "Tunnel Vision", "a")).unwrap();
        db.add_talent_level(&level("Anger", 60, "Second Wind", "b")).unwrap();
        let err = db
            .add_talent_level(&level("Anger", 60, "Tunnel Vision", "c"))
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(db.talent_levels("Anger").unwrap().len(), 2);
    }

    #[test]
    fn test_import_reports_duplicates() {
        let db = setup_db();
        let first = db.import_catalog(&sample_catalog()).unwrap();
        assert_eq!(first.succeeded, 6);
        assert_eq!(first.failed, 0);

        let second = db.import_catalog(&sample_catalog()).unwrap();
        assert_eq!(second.succeeded, 0);
        assert_eq!(second.failed, 6);
        assert!(second.errors[0].0.contains("Rehan"));

        let stats = db.stats().unwrap();
        assert_eq!(stats.skill_count, 2);
        assert_eq!(stats.talent_level_count, 1);
    }

    #[test]
    fn test_json_export_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("catalog.json");

        let source = setup_db();
        source.import_catalog(&sample_catalog()).unwrap();
        source.export_json(&path).unwrap();

        let target = setup_db();
        let result = target.import_json(&path).unwrap();
        assert_eq!(result.failed, 0);
        assert_eq!(target.load_catalog().unwrap(), source.load_catalog().unwrap());
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = setup_db().import_json(&path).unwrap_err();
        assert!(matches!(err, RepoError::Parse(ParseError::InvalidCatalog(_))));
    }

    #[test]
    fn test_loaded_catalog_feeds_engine() {
        let db = setup_db();
        db.import_catalog(&sample_catalog()).unwrap();
        let catalog = db.load_catalog().unwrap();
        let kb = tli::KnowledgeBase::builtin();
        let rec = tli::recommend_build(&catalog, &kb, &tli::RecommendRequest::new(1)).unwrap();
        assert_eq!(rec.recommended_skills[0].name, "Leap Slam");
        assert_eq!(rec.recommended_items.len(), 1);
    }

    #[test]
    fn test_bundled_sample_catalog() {
        let catalog: Catalog =
            serde_json::from_str(include_str!("../../../share/catalog.json")).unwrap();
        let db = setup_db();
        let result = db.import_catalog(&catalog).unwrap();
        assert_eq!(result.failed, 0);

        let loaded = db.load_catalog().unwrap();
        let kb = tli::KnowledgeBase::builtin()
            .with_overrides_from_yaml(include_str!("../../../share/knowledge.yaml"))
            .unwrap();
        for hero in &loaded.heroes {
            let rec =
                tli::recommend_build(&loaded, &kb, &tli::RecommendRequest::new(hero.id)).unwrap();
            assert!(!rec.recommended_skills.is_empty());
            assert!(rec.recommended_items.len() <= 10);
        }
    }
}
