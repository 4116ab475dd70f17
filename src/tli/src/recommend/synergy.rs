//! Build synergy score

use super::classify::{dominant_damage_type, BuildType};
use super::items::ScoredItem;
use super::skills::ScoredSkill;

pub const MAX_SYNERGY: f64 = 100.0;

/// Consistency and coverage of a recommendation, 0 to 100, two decimals
pub fn synergy_score(skills: &[ScoredSkill], items: &[ScoredItem], build_type: BuildType) -> f64 {
    let mut synergy = match build_type {
        BuildType::DoT | BuildType::Hit => 20.0,
        BuildType::HybridDoT => 10.0,
        BuildType::Unknown => 0.0,
    };

    if let Some((_, share)) = dominant_damage_type(skills) {
        synergy += share * 25.0;
    }

    synergy += (skills.len() as f64 * 4.0).min(20.0);
    synergy += (items.len() as f64 * 2.0).min(15.0);

    let set_items = items
        .iter()
        .filter(|i| i.set_name.as_deref().is_some_and(|s| !s.trim().is_empty()))
        .count();
    synergy += set_items as f64 * 3.0;

    if skills.iter().any(|s| s.spell_burst_compatible) {
        synergy += 5.0;
    }
    if skills.iter().any(|s| s.is_combo) {
        synergy += 5.0;
    }

    round2(synergy.clamp(0.0, MAX_SYNERGY))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(damage_type: Option<&str>, spell_burst: bool, combo: bool) -> ScoredSkill {
        ScoredSkill {
            skill_id: 0,
            name: String::new(),
            category: "Active".to_string(),
            damage_type: damage_type.map(str::to_string),
            tags: Vec::new(),
            is_dot: false,
            spell_burst_compatible: spell_burst,
            is_combo: combo,
            score: 0.0,
            reason: String::new(),
            priority: 4,
        }
    }

    fn item(set_name: Option<&str>) -> ScoredItem {
        ScoredItem {
            item_id: 0,
            name: String::new(),
            slot: "Head".to_string(),
            item_type: "Armor".to_string(),
            rarity: "Rare".to_string(),
            stat_type: None,
            set_name: set_name.map(str::to_string),
            score: 0.0,
            reason: String::new(),
        }
    }

    #[test]
    fn test_empty_build() {
        assert_eq!(synergy_score(&[], &[], BuildType::Unknown), 0.0);
    }

    #[test]
    fn test_components() {
        let skills = vec![
            skill(Some("Fire"), false, false),
            skill(Some("Fire"), false, false),
            skill(Some("Cold"), false, false),
        ];
        let items = vec![item(Some("Ember")), item(None)];
        // 10 hybrid + 2/3 * 25 + 12 skills + 4 items + 3 set
        assert_eq!(
            synergy_score(&skills, &items, BuildType::HybridDoT),
            round2(10.0 + 50.0 / 3.0 + 12.0 + 4.0 + 3.0)
        );
        assert_eq!(synergy_score(&skills, &items, BuildType::HybridDoT), 45.67);
    }

    #[test]
    fn test_capped_at_100() {
        let skills: Vec<ScoredSkill> = (0..10).map(|_| skill(Some("Fire"), true, true)).collect();
        let items: Vec<ScoredItem> = (0..20).map(|_| item(Some("Ember"))).collect();
        assert_eq!(synergy_score(&skills, &items, BuildType::Hit), MAX_SYNERGY);
    }

    #[test]
    fn test_coverage_caps() {
        let skills: Vec<ScoredSkill> = (0..10).map(|_| skill(None, false, false)).collect();
        let items: Vec<ScoredItem> = (0..10).map(|_| item(None)).collect();
        assert_eq!(synergy_score(&skills, &items, BuildType::Hit), 20.0 + 20.0 + 15.0);
    }
}
