//! Shared constants and helpers for database implementations.
//!
//! Column lists here must match the positional indices used in the row
//! mapping functions.

use crate::types::ParseError;

/// Column list for hero SELECT queries
pub const HERO_COLUMNS: &str = "id, name, god_type, talent, description";

/// Column list for skill SELECT queries
pub const SKILL_COLUMNS: &str =
    "id, name, category, description, tags, damage_type, cooldown, mana_cost";

/// Column list for item SELECT queries
pub const ITEM_COLUMNS: &str =
    "id, name, item_type, slot, rarity, stat_type, special_effects, set_name";

/// Column list for talent node SELECT queries
pub const TALENT_NODE_COLUMNS: &str = "id, name, node_type, god_class, tier, effect";

/// Column list for talent level SELECT queries
pub const TALENT_LEVEL_COLUMNS: &str =
    "talent_name, level, effect_name, effect_description, mechanics";

/// Decode a JSON array of strings as stored in text columns
pub fn decode_string_list(raw: &str) -> Result<Vec<String>, ParseError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| ParseError::InvalidStringList(e.to_string()))
}

/// Encode a string list for a text column
pub fn encode_string_list(values: &[String]) -> String {
    serde_json::Value::from(values.to_vec()).to_string()
}

/// SQLite schema definitions
pub mod schema {
    pub const HEROES_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            god_type TEXT NOT NULL,
            talent TEXT NOT NULL UNIQUE,
            description TEXT
        )
    "#;

    pub const SKILLS_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT,
            tags TEXT,
            damage_type TEXT,
            cooldown REAL,
            mana_cost REAL
        )
    "#;

    pub const ITEMS_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            item_type TEXT NOT NULL,
            slot TEXT NOT NULL,
            rarity TEXT NOT NULL,
            stat_type TEXT,
            special_effects TEXT,
            set_name TEXT
        )
    "#;

    pub const TALENT_NODES_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS talent_nodes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            node_type TEXT NOT NULL,
            god_class TEXT,
            tier TEXT,
            effect TEXT
        )
    "#;

    pub const TALENT_LEVELS_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS talent_levels (
            talent_name TEXT NOT NULL,
            level INTEGER NOT NULL,
            effect_name TEXT NOT NULL,
            effect_description TEXT,
            mechanics TEXT,
            PRIMARY KEY (talent_name, level, effect_name)
        )
    "#;

    pub const INDEXES: &str = r#"
        CREATE INDEX IF NOT EXISTS idx_talent_levels_talent ON talent_levels(talent_name, level);
        CREATE INDEX IF NOT EXISTS idx_items_slot ON items(slot);
    "#;

    /// All tables in creation order
    pub const ALL: &[&str] = &[
        HEROES_TABLE,
        SKILLS_TABLE,
        ITEMS_TABLE,
        TALENT_NODES_TABLE,
        TALENT_LEVELS_TABLE,
        INDEXES,
    ];
}
