//! Talent level mechanics extraction
//!
//! Reads the per-level effect rows recorded for a talent, collects the stored
//! mechanic tags per level and checks the pivotal level for a severe penalty
//! on off-archetype skills. Results are cached per talent name for the
//! lifetime of one extractor, which lives inside one engine instance.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::{Catalog, TalentLevel};
use crate::reference::keywords::{is_severe_penalty, PIVOTAL_LEVEL};

/// Mechanics recorded for one talent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentLevelProfile {
    /// Mechanic tags per level, levels ascending
    pub mechanics: BTreeMap<i32, Vec<String>>,
    /// The pivotal level carries a severe off-archetype penalty
    pub has_pivotal_penalty: bool,
}

impl TalentLevelProfile {
    /// (level, mechanic) pairs at or above the pivotal level
    pub fn late_mechanics(&self) -> impl Iterator<Item = (i32, &str)> {
        self.mechanics
            .range(PIVOTAL_LEVEL..)
            .flat_map(|(level, mechs)| mechs.iter().map(move |m| (*level, m.as_str())))
    }
}

/// Parse stored mechanic tags. Missing or malformed data means no mechanics.
pub fn parse_mechanics(level: &TalentLevel) -> Vec<String> {
    let Some(raw) = level.mechanics.as_deref() else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(mechs) => mechs,
        Err(e) => {
            tracing::warn!(
                talent = %level.talent_name,
                level = level.level,
                error = %e,
                "unparsable level mechanics, treating as empty"
            );
            Vec::new()
        }
    }
}

/// Memoizing extractor over a catalog snapshot
#[derive(Debug)]
pub struct TalentLevelExtractor<'a> {
    catalog: &'a Catalog,
    cache: HashMap<String, TalentLevelProfile>,
}

impl<'a> TalentLevelExtractor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cache: HashMap::new(),
        }
    }

    /// Level profile for a talent, computed on first use
    pub fn profile(&mut self, talent: &str) -> &TalentLevelProfile {
        let catalog = self.catalog;
        self.cache
            .entry(talent.to_string())
            .or_insert_with(|| Self::extract(catalog, talent))
    }

    /// Number of talents extracted so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn extract(catalog: &Catalog, talent: &str) -> TalentLevelProfile {
        let mut profile = TalentLevelProfile::default();
        for level in catalog.talent_levels_for(talent) {
            profile
                .mechanics
                .entry(level.level)
                .or_default()
                .extend(parse_mechanics(level));

            if level.level == PIVOTAL_LEVEL
                && level
                    .effect_description
                    .as_deref()
                    .is_some_and(is_severe_penalty)
            {
                profile.has_pivotal_penalty = true;
            }
        }
        tracing::debug!(
            talent,
            levels = profile.mechanics.len(),
            pivotal_penalty = profile.has_pivotal_penalty,
            "extracted talent level mechanics"
        );
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: i32, desc: &str, mechanics: Option<&str>) -> TalentLevel {
        TalentLevel {
            talent_name: "Anger".to_string(),
            level,
            effect_name: format!("Lv{}", level),
            effect_description: Some(desc.to_string()),
            mechanics: mechanics.map(str::to_string),
        }
    }

    #[test]
    fn test_pivotal_penalty_detected() {
        let catalog = Catalog {
            talent_levels: vec![
                row(8, "+10% Attack Speed", Some(r#"["attack_speed"]"#)),
                row(60, "Tunnel Vision: -80% damage for non-Burst skills", None),
            ],
            ..Default::default()
        };
        let mut extractor = TalentLevelExtractor::new(&catalog);
        let profile = extractor.profile("Anger");
        assert!(profile.has_pivotal_penalty);
        assert_eq!(profile.mechanics[&8], vec!["attack_speed"]);
        assert!(profile.mechanics[&60].is_empty());
    }

    #[test]
    fn test_penalty_only_counts_at_pivotal_level() {
        let catalog = Catalog {
            talent_levels: vec![row(45, "-80% damage taken", None)],
            ..Default::default()
        };
        let mut extractor = TalentLevelExtractor::new(&catalog);
        assert!(!extractor.profile("Anger").has_pivotal_penalty);
    }

    #[test]
    fn test_malformed_mechanics_are_empty() {
        let catalog = Catalog {
            talent_levels: vec![
                row(60, "Melee mastery", Some("not json")),
                row(72, "Critical mastery", Some(r#"["critical","area"]"#)),
            ],
            ..Default::default()
        };
        let mut extractor = TalentLevelExtractor::new(&catalog);
        let profile = extractor.profile("Anger");
        assert!(profile.mechanics[&60].is_empty());
        let late: Vec<_> = profile.late_mechanics().collect();
        assert_eq!(late, vec![(72, "critical"), (72, "area")]);
    }

    #[test]
    fn test_results_are_memoized() {
        let catalog = Catalog::default();
        let mut extractor = TalentLevelExtractor::new(&catalog);
        assert_eq!(extractor.profile("Anger"), &TalentLevelProfile::default());
        extractor.profile("Anger");
        extractor.profile("Ranger of Glory");
        assert_eq!(extractor.cached(), 2);
    }
}
