//! Core types for the catalog database

use serde::{Deserialize, Serialize};

/// Catalog table names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTable {
    Heroes,
    Skills,
    Items,
    TalentNodes,
    TalentLevels,
}

impl CatalogTable {
    pub const ALL: [CatalogTable; 5] = [
        Self::Heroes,
        Self::Skills,
        Self::Items,
        Self::TalentNodes,
        Self::TalentLevels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heroes => "heroes",
            Self::Skills => "skills",
            Self::Items => "items",
            Self::TalentNodes => "talent_nodes",
            Self::TalentLevels => "talent_levels",
        }
    }
}

impl std::fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CatalogTable {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heroes" => Ok(Self::Heroes),
            "skills" => Ok(Self::Skills),
            "items" => Ok(Self::Items),
            "talent_nodes" | "nodes" => Ok(Self::TalentNodes),
            "talent_levels" | "levels" => Ok(Self::TalentLevels),
            _ => Err(ParseError::InvalidTable(s.to_string())),
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub hero_count: i64,
    pub skill_count: i64,
    pub item_count: i64,
    pub talent_node_count: i64,
    pub talent_level_count: i64,
}

impl DbStats {
    pub fn count(&self, table: CatalogTable) -> i64 {
        match table {
            CatalogTable::Heroes => self.hero_count,
            CatalogTable::Skills => self.skill_count,
            CatalogTable::Items => self.item_count,
            CatalogTable::TalentNodes => self.talent_node_count,
            CatalogTable::TalentLevels => self.talent_level_count,
        }
    }
}

/// Error parsing stored or imported data
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid table name: {0}")]
    InvalidTable(String),
    #[error("Invalid string list: {0}")]
    InvalidStringList(String),
    #[error("Invalid catalog document: {0}")]
    InvalidCatalog(String),
}
