//! Special skill mechanics (Spell Burst, Combo)

/// A skill mechanic that changes how damage is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMechanic {
    pub name: &'static str,
    /// Tag a skill must carry to use the mechanic
    pub required_tag: &'static str,
    /// Tags that rule the mechanic out
    pub excluded_tags: &'static [&'static str],
    pub scaling_stats: &'static [&'static str],
    pub description: &'static str,
}

/// Spell Burst: a charged spell is cast once per consumed stack
pub const SPELL_BURST: SkillMechanic = SkillMechanic {
    name: "Spell Burst",
    required_tag: "Spell",
    excluded_tags: &["Cooldown", "Summon", "Sentry", "Channeled", "Combo"],
    scaling_stats: &["Spell Burst Charge Speed", "Max Spell Burst", "Cast Speed"],
    description: "When fully charged, casts the spell once per consumed stack",
};

/// Combo: starters build points that a finisher consumes multiplicatively
pub const COMBO: SkillMechanic = SkillMechanic {
    name: "Combo",
    required_tag: "Combo",
    excluded_tags: &[],
    scaling_stats: &[
        "Combo Damage",
        "Combo Finisher Amplification",
        "Combo Starter/Finisher charges",
    ],
    description: "2 starters and 1 finisher within 1.5s, finisher scales with combo points",
};

/// All special mechanics
pub const SKILL_MECHANICS: &[SkillMechanic] = &[SPELL_BURST, COMBO];

fn has_tag<S: AsRef<str>>(tags: &[S], wanted: &str) -> bool {
    tags.iter().any(|t| t.as_ref().eq_ignore_ascii_case(wanted))
}

impl SkillMechanic {
    /// Whether a skill with these tags can use the mechanic
    pub fn is_compatible<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        has_tag(tags, self.required_tag) && !self.excluded_tags.iter().any(|x| has_tag(tags, x))
    }
}

/// Whether a skill can be charged and released through Spell Burst
pub fn is_spell_burst_compatible<S: AsRef<str>>(tags: &[S]) -> bool {
    SPELL_BURST.is_compatible(tags)
}

/// Whether a skill takes part in combos
pub fn is_combo_skill<S: AsRef<str>>(tags: &[S]) -> bool {
    COMBO.is_compatible(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_burst_requires_spell() {
        assert!(is_spell_burst_compatible(&["Spell"]));
        assert!(is_spell_burst_compatible(&["spell", "AoE"]));
        assert!(!is_spell_burst_compatible(&["Melee", "Attack"]));
    }

    #[test]
    fn test_spell_burst_exclusions() {
        for excluded in SPELL_BURST.excluded_tags {
            assert!(
                !is_spell_burst_compatible(&["Spell", excluded]),
                "{} should exclude Spell Burst",
                excluded
            );
        }
    }

    #[test]
    fn test_combo() {
        assert!(is_combo_skill(&["Melee", "Combo"]));
        assert!(!is_combo_skill(&["Melee"]));
    }
}
