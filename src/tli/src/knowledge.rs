//! Mechanics knowledge base
//!
//! An immutable bundle of the reference tables, handed to every scorer by
//! reference. Built once per process with [`KnowledgeBase::builtin`]; talent
//! profiles can additionally be extended from a YAML document.
//!
//! ```yaml
//! talents:
//!   - talent: Frostfire
//!     core_mechanic: Spell Burst
//!     must_have: [Spell, Cast Speed]
//!     avoid: [DoT]
//!     recommended_skill_types: [Spell]
//!     recommended_item_stats: [Cast Speed, Spell Damage]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reference::{
    ailment_for_damage_type, preferred_damage_types, primary_stat_for_god_type,
    recommended_stats_for_tags, PrimaryStat, TalentMechanics, BURST_CORE_MECHANIC,
    TALENT_MECHANICS,
};

/// Error type for knowledge base loading
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid knowledge base YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Talent profile without a talent name")]
    MissingTalentName,
}

/// Mechanics profile for one talent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub talent: String,
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub god_type: Option<String>,
    #[serde(default)]
    pub core_mechanic: Option<String>,
    #[serde(default)]
    pub build_focus: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
    #[serde(default)]
    pub recommended_skill_types: Vec<String>,
    #[serde(default)]
    pub recommended_item_stats: Vec<String>,
    #[serde(default)]
    pub playstyle: Option<String>,
}

impl TalentProfile {
    /// Whether the talent concentrates its damage into bursts
    pub fn is_burst(&self) -> bool {
        self.core_mechanic.as_deref() == Some(BURST_CORE_MECHANIC)
    }

    /// Whether any avoid entry mentions the given (lowercase) keyword
    pub fn avoids(&self, keyword: &str) -> bool {
        self.avoid
            .iter()
            .any(|a| a.to_lowercase().contains(keyword))
    }
}

impl From<&TalentMechanics> for TalentProfile {
    fn from(t: &TalentMechanics) -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect();
        Self {
            talent: t.talent.to_string(),
            hero: Some(t.hero.to_string()),
            god_type: Some(t.god_type.to_string()),
            core_mechanic: Some(t.core_mechanic.to_string()),
            build_focus: Some(t.build_focus.to_string()),
            description: Some(t.description.to_string()),
            must_have: owned(t.must_have),
            avoid: owned(t.avoid),
            recommended_skill_types: owned(t.recommended_skill_types),
            recommended_item_stats: owned(t.recommended_item_stats),
            playstyle: Some(t.playstyle.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct KnowledgeOverrides {
    #[serde(default)]
    talents: Vec<TalentProfile>,
}

/// Read-only mechanics reference for the recommendation engine.
///
/// Fixed tables are answered by [`crate::reference`]; only talent profiles
/// can be overridden.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    talents: BTreeMap<String, TalentProfile>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Knowledge base made of the built-in reference tables
    pub fn builtin() -> Self {
        let talents = TALENT_MECHANICS
            .iter()
            .map(|t| (t.talent.to_string(), TalentProfile::from(t)))
            .collect();
        Self { talents }
    }

    /// Add or replace talent profiles from a YAML document
    pub fn with_overrides_from_yaml(mut self, yaml: &str) -> Result<Self, KnowledgeError> {
        let overrides: KnowledgeOverrides = serde_yaml::from_str(yaml)?;
        for profile in overrides.talents {
            if profile.talent.trim().is_empty() {
                return Err(KnowledgeError::MissingTalentName);
            }
            tracing::debug!(talent = %profile.talent, "talent profile override");
            self.talents.insert(profile.talent.clone(), profile);
        }
        Ok(self)
    }

    /// Built-in knowledge base with overrides read from a YAML file
    pub fn load_with_overrides<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::builtin().with_overrides_from_yaml(&yaml)
    }

    /// Mechanics profile for a talent, if one was curated
    pub fn talent(&self, talent: &str) -> Option<&TalentProfile> {
        self.talents.get(talent)
    }

    /// All talent profiles, ordered by talent name
    pub fn talents(&self) -> impl Iterator<Item = &TalentProfile> {
        self.talents.values()
    }

    /// Ailment inflicted by a damage type
    pub fn ailment_for(&self, damage_type: &str) -> Option<&'static str> {
        ailment_for_damage_type(damage_type)
    }

    /// Damage types a hero prefers, best first
    pub fn preferred_damage_types(
        &self,
        stat: PrimaryStat,
        god_type: &str,
    ) -> &'static [&'static str] {
        preferred_damage_types(stat, god_type)
    }

    /// Primary stat derived from a god type (STR when unlisted)
    pub fn primary_stat(&self, god_type: &str) -> PrimaryStat {
        primary_stat_for_god_type(god_type)
    }

    /// Distinct recommended stats implied by skill tags
    pub fn tag_stats<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&'static str> {
        recommended_stats_for_tags(tags)
    }
}
