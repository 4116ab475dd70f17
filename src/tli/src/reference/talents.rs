//! Talent mechanic profiles
//!
//! Hand-curated notes on what each talent needs from a build. Keys are the
//! same talent names stored on hero records.

/// Built-in mechanics profile for one talent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentMechanics {
    pub talent: &'static str,
    pub hero: &'static str,
    pub god_type: &'static str,
    pub core_mechanic: &'static str,
    /// Burst / Hit / DoT / Hybrid
    pub build_focus: &'static str,
    pub description: &'static str,
    pub must_have: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub recommended_skill_types: &'static [&'static str],
    pub recommended_item_stats: &'static [&'static str],
    pub playstyle: &'static str,
}

/// Core mechanic marking a burst-archetype talent
pub const BURST_CORE_MECHANIC: &str = "Burst Damage";

/// All built-in talent profiles
pub const TALENT_MECHANICS: &[TalentMechanics] = &[
    TalentMechanics {
        talent: "Anger",
        hero: "Rehan",
        god_type: "Berserker",
        core_mechanic: BURST_CORE_MECHANIC,
        build_focus: "Burst",
        description: "Fully specialized in Burst damage. Level 60 applies -80% damage to non-Burst skills",
        must_have: &["Melee Attack", "Attack Speed", "Critical Strike", "Area"],
        avoid: &["Non-Burst Damage", "DoT", "Spell"],
        recommended_skill_types: &["Melee", "Attack", "AoE"],
        recommended_item_stats: &[
            "Attack Speed",
            "Critical Strike",
            "Area of Effect",
            "Melee Damage",
            "Physical Damage",
            "Rage Generation",
            "Cooldown Recovery",
        ],
        playstyle: "Melee Burst",
    },
    TalentMechanics {
        talent: "Seething Silhouette",
        hero: "Rehan",
        god_type: "Berserker",
        core_mechanic: "Shadow Clone",
        build_focus: "Hit",
        description: "Summons a shadow clone that attacks alongside the hero",
        must_have: &["Melee Attack", "Attack Speed", "Minion Damage"],
        avoid: &[],
        recommended_skill_types: &["Melee", "Attack"],
        recommended_item_stats: &[
            "Attack Speed",
            "Melee Damage",
            "Minion Damage",
            "Physical Damage",
        ],
        playstyle: "Melee Clone",
    },
    TalentMechanics {
        talent: "Ranger of Glory",
        hero: "Carino",
        god_type: "Divineshot",
        core_mechanic: "Projectile",
        build_focus: "Hit",
        description: "Projectile attacks that pierce through packs",
        must_have: &["Projectile", "Attack Speed", "Pierce"],
        avoid: &[],
        recommended_skill_types: &["Projectile", "Attack", "Bow"],
        recommended_item_stats: &[
            "Projectile Speed",
            "Attack Speed",
            "Pierce",
            "Projectile Damage",
        ],
        playstyle: "Ranged Projectile",
    },
];

/// Get a built-in talent profile by talent name
pub fn talent_mechanics(talent: &str) -> Option<&'static TalentMechanics> {
    TALENT_MECHANICS.iter().find(|t| t.talent == talent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talent_lookup() {
        let anger = talent_mechanics("Anger").unwrap();
        assert_eq!(anger.core_mechanic, BURST_CORE_MECHANIC);
        assert!(anger.avoid.contains(&"DoT"));
        assert!(talent_mechanics("Nonexistent").is_none());
    }

    #[test]
    fn test_talent_names_are_unique() {
        for (i, a) in TALENT_MECHANICS.iter().enumerate() {
            for b in &TALENT_MECHANICS[i + 1..] {
                assert_ne!(a.talent, b.talent);
            }
        }
    }
}
