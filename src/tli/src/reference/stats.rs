//! Primary stat definitions

use serde::{Deserialize, Serialize};

/// Hero primary attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryStat {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "INT")]
    Int,
}

impl PrimaryStat {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Int => "INT",
        }
    }
}

impl std::fmt::Display for PrimaryStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PrimaryStat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STR" => Ok(Self::Str),
            "DEX" => Ok(Self::Dex),
            "INT" => Ok(Self::Int),
            _ => Err(format!("unknown primary stat: {}", s)),
        }
    }
}

/// What a primary stat means for a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatAffinity {
    pub stat: PrimaryStat,
    /// God types whose heroes use this stat
    pub primary_for: &'static [&'static str],
    pub typical_bonuses: &'static [&'static str],
    /// Damage types in order of preference
    pub preferred_damage: &'static [&'static str],
    pub playstyle: &'static str,
}

/// All primary stat affinities
pub const STAT_AFFINITIES: &[StatAffinity] = &[
    StatAffinity {
        stat: PrimaryStat::Str,
        primary_for: &["Berserker", "Warrior", "Commander"],
        typical_bonuses: &["Physical Damage", "Life", "Armor"],
        preferred_damage: &["Physical", "Fire"],
        playstyle: "Melee, Tank, Physical damage",
    },
    StatAffinity {
        stat: PrimaryStat::Dex,
        primary_for: &["Ranger", "Spacetime Witness", "Carino", "Divineshot"],
        typical_bonuses: &["Attack Speed", "Evasion", "Accuracy", "Projectile Damage"],
        preferred_damage: &["Lightning", "Cold", "Physical"],
        playstyle: "Ranged, Agile, Attack-based",
    },
    StatAffinity {
        stat: PrimaryStat::Int,
        primary_for: &["Mage", "Oracle"],
        typical_bonuses: &["Spell Damage", "Mana", "Energy Shield"],
        preferred_damage: &["Fire", "Cold", "Lightning", "Erosion"],
        playstyle: "Spellcaster, Elemental damage",
    },
];

/// God types whose damage preference differs from their stat's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GodTypeDamage {
    pub god_type: &'static str,
    /// Replaces the stat's list. A repeated entry pushes later types down a rank.
    pub preferred_damage: &'static [&'static str],
}

pub const GOD_TYPE_DAMAGE_OVERRIDES: &[GodTypeDamage] = &[GodTypeDamage {
    god_type: "Berserker",
    preferred_damage: &["Physical", "Physical", "Fire"],
}];

/// Get the affinity entry for a stat
pub fn stat_affinity(stat: PrimaryStat) -> &'static StatAffinity {
    STAT_AFFINITIES
        .iter()
        .find(|a| a.stat == stat)
        .unwrap_or(&STAT_AFFINITIES[0])
}

/// Derive a hero's primary stat from its god type. Unlisted god types are STR.
pub fn primary_stat_for_god_type(god_type: &str) -> PrimaryStat {
    let god_type = god_type.trim();
    STAT_AFFINITIES
        .iter()
        .find(|a| a.primary_for.iter().any(|g| g.eq_ignore_ascii_case(god_type)))
        .map(|a| a.stat)
        .unwrap_or(PrimaryStat::Str)
}

/// Damage types a hero favors, best first. The god type can override the stat's list.
pub fn preferred_damage_types(stat: PrimaryStat, god_type: &str) -> &'static [&'static str] {
    let god_type = god_type.trim();
    GOD_TYPE_DAMAGE_OVERRIDES
        .iter()
        .find(|o| o.god_type.eq_ignore_ascii_case(god_type))
        .map(|o| o.preferred_damage)
        .unwrap_or(stat_affinity(stat).preferred_damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_stat_lookup() {
        assert_eq!(primary_stat_for_god_type("Berserker"), PrimaryStat::Str);
        assert_eq!(primary_stat_for_god_type("Divineshot"), PrimaryStat::Dex);
        assert_eq!(primary_stat_for_god_type("spacetime witness"), PrimaryStat::Dex);
        assert_eq!(primary_stat_for_god_type("Oracle"), PrimaryStat::Int);
        assert_eq!(primary_stat_for_god_type("Unknown"), PrimaryStat::Str);
    }

    #[test]
    fn test_preferred_damage_order() {
        assert_eq!(preferred_damage_types(PrimaryStat::Str, "Warrior"), &["Physical", "Fire"]);
        assert_eq!(preferred_damage_types(PrimaryStat::Int, "Mage")[0], "Fire");
        assert_eq!(preferred_damage_types(PrimaryStat::Dex, "Divineshot").len(), 3);
    }

    #[test]
    fn test_berserker_damage_override() {
        let berserker = preferred_damage_types(PrimaryStat::Str, "berserker");
        assert_eq!(berserker, &["Physical", "Physical", "Fire"]);
        assert_eq!(berserker.iter().position(|d| *d == "Fire"), Some(2));
    }

    #[test]
    fn test_primary_stat_codes() {
        assert_eq!(PrimaryStat::Dex.to_string(), "DEX");
        assert_eq!("int".parse::<PrimaryStat>(), Ok(PrimaryStat::Int));
        assert!("LUK".parse::<PrimaryStat>().is_err());
        assert_eq!(
            serde_json::to_string(&PrimaryStat::Str).unwrap(),
            "\"STR\""
        );
    }
}
