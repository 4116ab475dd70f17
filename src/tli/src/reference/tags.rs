//! Skill tag synergy definitions

/// Which speed stat scales a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSpeed {
    AttackSpeed,
    CastSpeed,
}

impl std::fmt::Display for SkillSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttackSpeed => write!(f, "Attack Speed"),
            Self::CastSpeed => write!(f, "Cast Speed"),
        }
    }
}

/// Stats recommended for skills carrying a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSynergy {
    pub tag: &'static str,
    pub recommended_stats: &'static [&'static str],
    pub avoid_stats: &'static [&'static str],
    pub speed: Option<SkillSpeed>,
}

/// All tag synergies
pub const SKILL_TAG_SYNERGIES: &[TagSynergy] = &[
    TagSynergy {
        tag: "DoT",
        recommended_stats: &["Affliction", "Reaping", "Duration", "Ailment Chance"],
        avoid_stats: &["Critical Strike", "Double Damage", "Accuracy"],
        speed: None,
    },
    TagSynergy {
        tag: "AoE",
        recommended_stats: &["Area Damage", "Area of Effect", "Explosion Damage"],
        avoid_stats: &[],
        speed: None,
    },
    TagSynergy {
        tag: "Melee",
        recommended_stats: &["Attack Speed", "Physical Damage", "Melee Range"],
        avoid_stats: &[],
        speed: Some(SkillSpeed::AttackSpeed),
    },
    TagSynergy {
        tag: "Spell",
        recommended_stats: &["Cast Speed", "Spell Damage", "Mana", "Mana Regeneration"],
        avoid_stats: &[],
        speed: Some(SkillSpeed::CastSpeed),
    },
    TagSynergy {
        tag: "Projectile",
        recommended_stats: &["Projectile Speed", "Pierce", "Chain", "Fork"],
        avoid_stats: &[],
        speed: None,
    },
    TagSynergy {
        tag: "Attack",
        recommended_stats: &["Attack Speed", "Accuracy", "Attack Damage"],
        avoid_stats: &[],
        speed: Some(SkillSpeed::AttackSpeed),
    },
    TagSynergy {
        tag: "Channeled",
        recommended_stats: &["Mana Cost Reduction", "Mana Regeneration", "Duration"],
        avoid_stats: &[],
        speed: None,
    },
    TagSynergy {
        tag: "Summon",
        recommended_stats: &["Minion Damage", "Minion Life", "Maximum Summons"],
        avoid_stats: &[],
        speed: None,
    },
    TagSynergy {
        tag: "Curse",
        recommended_stats: &["Curse Effect", "Curse Duration", "Area of Effect"],
        avoid_stats: &[],
        speed: None,
    },
    TagSynergy {
        tag: "Warcry",
        recommended_stats: &["Warcry Effect", "Cooldown Recovery", "Area of Effect"],
        avoid_stats: &[],
        speed: None,
    },
];

/// Get tag synergy by tag name (case-insensitive)
pub fn tag_synergy(tag: &str) -> Option<&'static TagSynergy> {
    SKILL_TAG_SYNERGIES
        .iter()
        .find(|s| s.tag.eq_ignore_ascii_case(tag))
}

/// Distinct recommended stats implied by a set of tags, in first-seen order
pub fn recommended_stats_for_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&'static str> {
    let mut stats: Vec<&'static str> = Vec::new();
    for synergy in tags.iter().filter_map(|t| tag_synergy(t.as_ref())) {
        for stat in synergy.recommended_stats {
            if !stats.contains(stat) {
                stats.push(stat);
            }
        }
    }
    stats
}

/// Speed stat for a skill. Spell wins over attack tags.
pub fn skill_speed_for_tags<S: AsRef<str>>(tags: &[S]) -> Option<SkillSpeed> {
    let speeds: Vec<SkillSpeed> = tags
        .iter()
        .filter_map(|t| tag_synergy(t.as_ref()).and_then(|s| s.speed))
        .collect();
    if speeds.contains(&SkillSpeed::CastSpeed) {
        Some(SkillSpeed::CastSpeed)
    } else {
        speeds.first().copied()
    }
}
