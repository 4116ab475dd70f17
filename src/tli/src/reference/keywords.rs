//! Keyword rule tables
//!
//! Free-text fields (skill descriptions, item effects, talent node effects,
//! talent level effects) are classified by loose substring matching. Every
//! keyword the engine looks for lives here so the heuristics can be read and
//! tested in one place. All matching is done on lowercased text.

/// How a rule's keywords must appear in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// At least one keyword appears
    Any(&'static [&'static str]),
    /// Every keyword appears
    All(&'static [&'static str]),
}

impl Match {
    /// Test lowercased text against the keywords
    pub fn matches(&self, text_lower: &str) -> bool {
        match self {
            Self::Any(kws) => kws.iter().any(|k| text_lower.contains(k)),
            Self::All(kws) => kws.iter().all(|k| text_lower.contains(k)),
        }
    }
}

/// A scoring rule: when the text matches, add `points` and record `reason`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordRule {
    pub matcher: Match,
    pub points: f64,
    pub reason: &'static str,
}

/// A tagging rule: when the text matches, attach `mechanic`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MechanicRule {
    pub mechanic: &'static str,
    pub matcher: Match,
}

/// First keyword (in table order) that appears in the text
pub fn first_keyword(text_lower: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| text_lower.contains(k))
}

/// Whether any keyword appears in the text
pub fn mentions_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}

// ============================================================================
// Skills
// ============================================================================

/// A skill is damage-over-time if a tag or its description contains one of these
pub const DOT_SKILL_KEYWORDS: &[&str] = &[
    "dot",
    "damage over time",
    "per second",
    "ignite",
    "trauma",
    "wilt",
    "bleed",
    "poison",
    "burning",
    "erosion",
    "affliction",
];

/// Mechanics recorded at late talent levels that skills can lean into
pub const LATE_LEVEL_SKILL_MECHANICS: &[&str] = &["melee", "attack_speed", "critical", "area"];

/// Level whose effect decides whether off-archetype skills are crippled
pub const PIVOTAL_LEVEL: i32 = 60;

// ============================================================================
// Items
// ============================================================================

/// DoT scaling wording on items. Only the first hit is rewarded.
pub const ITEM_DOT_KEYWORDS: &[&str] = &["affliction", "reaping", "damage over time", "dot"];

/// Critical strike wording
pub const CRIT_KEYWORDS: &[&str] = &["critical", "crit"];

/// Double damage wording
pub const DOUBLE_DAMAGE_KEYWORDS: &[&str] = &["double damage"];

/// Item text naming the Spell Burst mechanic
pub const SPELL_BURST_EFFECT_KEYWORDS: &[&str] = &["spell burst"];

/// Item text naming the Combo mechanic
pub const COMBO_EFFECT_KEYWORDS: &[&str] = &["combo"];

/// Item wording that feeds a burst-archetype talent
pub const BURST_ITEM_RULES: &[KeywordRule] = &[
    KeywordRule {
        matcher: Match::Any(&["attack speed"]),
        points: 18.0,
        reason: "Burst cooldown reduction (Attack Speed)",
    },
    KeywordRule {
        matcher: Match::Any(CRIT_KEYWORDS),
        points: 15.0,
        reason: "Rage generation (Crit)",
    },
    KeywordRule {
        matcher: Match::Any(&["area", "aoe"]),
        points: 15.0,
        reason: "Burst damage amplifier (Area)",
    },
    KeywordRule {
        matcher: Match::Any(&["burst"]),
        points: 20.0,
        reason: "Direct Burst damage",
    },
    KeywordRule {
        matcher: Match::Any(&["melee"]),
        points: 12.0,
        reason: "Melee damage",
    },
    KeywordRule {
        matcher: Match::Any(&["rage"]),
        points: 15.0,
        reason: "Rage generation",
    },
    KeywordRule {
        matcher: Match::All(&["cooldown", "recovery"]),
        points: 15.0,
        reason: "Cooldown recovery",
    },
];

// ============================================================================
// Talent nodes
// ============================================================================

/// Node effect wording that suits DoT-leaning builds
pub const DOT_NODE_KEYWORDS: &[&str] = &["affliction", "reaping", "damage over time"];

/// Node effect wording that suits hit builds
pub const HIT_NODE_KEYWORDS: &[&str] = &["critical", "attack", "hit"];

// ============================================================================
// Talent levels
// ============================================================================

/// Effect wording at the pivotal level that signals a severe penalty
pub const LEVEL_PENALTY_MARKERS: &[Match] = &[
    Match::Any(&["-80%", "-50%"]),
    Match::All(&["non-", "damage"]),
];

/// Mechanic tag attached to every pivotal-level row at ingestion
pub const PIVOTAL_LEVEL_TAG: &str = "level_60_critical";

/// Coarse mechanic tags extracted from talent level effect text
pub const LEVEL_MECHANIC_RULES: &[MechanicRule] = &[
    MechanicRule {
        mechanic: "burst",
        matcher: Match::Any(&["burst"]),
    },
    MechanicRule {
        mechanic: "rage",
        matcher: Match::Any(&["rage"]),
    },
    MechanicRule {
        mechanic: "melee",
        matcher: Match::Any(&["melee"]),
    },
    MechanicRule {
        mechanic: "attack_speed",
        matcher: Match::Any(&["attack speed"]),
    },
    MechanicRule {
        mechanic: "critical",
        matcher: Match::Any(CRIT_KEYWORDS),
    },
    MechanicRule {
        mechanic: "area",
        matcher: Match::Any(&["area", "aoe"]),
    },
    MechanicRule {
        mechanic: "damage_penalty",
        matcher: Match::Any(&["-80%", "damage for non-"]),
    },
    MechanicRule {
        mechanic: "cooldown",
        matcher: Match::Any(&["cooldown"]),
    },
    MechanicRule {
        mechanic: "dot",
        matcher: Match::Any(&["damage over time", "dot", "ignite", "bleed"]),
    },
    MechanicRule {
        mechanic: "spell",
        matcher: Match::Any(&["spell"]),
    },
    MechanicRule {
        mechanic: "projectile",
        matcher: Match::Any(&["projectile"]),
    },
    MechanicRule {
        mechanic: "summon",
        matcher: Match::Any(&["summon", "minion", "clone"]),
    },
    MechanicRule {
        mechanic: "affliction",
        matcher: Match::Any(&["affliction", "ailment"]),
    },
];

/// Tag a talent level's effect text with coarse mechanic keywords
pub fn extract_level_mechanics(description: &str, level: i32) -> Vec<String> {
    let lower = description.to_lowercase();
    let mut mechanics: Vec<String> = LEVEL_MECHANIC_RULES
        .iter()
        .filter(|r| r.matcher.matches(&lower))
        .map(|r| r.mechanic.to_string())
        .collect();
    if level == PIVOTAL_LEVEL {
        mechanics.push(PIVOTAL_LEVEL_TAG.to_string());
    }
    mechanics
}

/// Whether a pivotal-level effect imposes a severe penalty
pub fn is_severe_penalty(description: &str) -> bool {
    let lower = description.to_lowercase();
    LEVEL_PENALTY_MARKERS.iter().any(|m| m.matches(&lower))
}
