//! Catalog records and the read-only snapshot consumed by the engine
//!
//! Records are populated by the catalog provider (see `tli-idb`). The engine
//! only ever reads a [`Catalog`]; iteration order is the provider's insertion
//! order and decides how score ties are broken.

use serde::{Deserialize, Serialize};

use crate::reference::PrimaryStat;

/// A playable hero with exactly one talent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub god_type: String,
    pub talent: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Active / Support / Passive / ...
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub cooldown: Option<f64>,
    #[serde(default)]
    pub mana_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub item_type: String,
    /// Equipment position, one per item
    pub slot: String,
    pub rarity: String,
    /// Primary stat affinity ("STR", "DEX", "INT")
    #[serde(default)]
    pub stat_type: Option<String>,
    #[serde(default)]
    pub special_effects: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
}

impl Item {
    pub fn has_affinity(&self, stat: PrimaryStat) -> bool {
        self.stat_type
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(stat.code()))
    }

    pub fn in_set(&self) -> bool {
        self.set_name.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentNode {
    pub id: i64,
    pub name: String,
    /// Core / Regular
    pub node_type: String,
    #[serde(default)]
    pub god_class: Option<String>,
    /// Micro / Medium / Large / Legendary
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
}

/// One effect unlocked at a talent level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentLevel {
    pub talent_name: String,
    pub level: i32,
    pub effect_name: String,
    #[serde(default)]
    pub effect_description: Option<String>,
    /// Mechanic keyword tags as stored: a JSON array of strings
    #[serde(default)]
    pub mechanics: Option<String>,
}

/// Read-only catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub talent_nodes: Vec<TalentNode>,
    #[serde(default)]
    pub talent_levels: Vec<TalentLevel>,
}

impl Catalog {
    pub fn hero(&self, id: i64) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    /// Level rows recorded for a talent, ordered by level
    pub fn talent_levels_for(&self, talent: &str) -> Vec<&TalentLevel> {
        let mut levels: Vec<&TalentLevel> = self
            .talent_levels
            .iter()
            .filter(|l| l.talent_name == talent)
            .collect();
        levels.sort_by_key(|l| l.level);
        levels
    }
}
