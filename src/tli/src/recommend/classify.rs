//! Build type classification

use std::fmt;

use serde::{Deserialize, Serialize};

use super::skills::ScoredSkill;

/// Damage-delivery skew of a recommended skill set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    DoT,
    Hit,
    #[serde(rename = "Hybrid_DoT")]
    HybridDoT,
    Unknown,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DoT => "DoT",
            Self::Hit => "Hit",
            Self::HybridDoT => "Hybrid_DoT",
            Self::Unknown => "Unknown",
        }
    }

    /// DoT or hybrid builds scale damage over time
    pub fn is_dot_leaning(&self) -> bool {
        matches!(self, Self::DoT | Self::HybridDoT)
    }

    /// Pure builds get the full consistency bonus
    pub fn is_pure(&self) -> bool {
        matches!(self, Self::DoT | Self::Hit)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the selected skills by their DoT ratio
pub fn classify_build(skills: &[ScoredSkill]) -> BuildType {
    if skills.is_empty() {
        return BuildType::Unknown;
    }
    let dot = skills.iter().filter(|s| s.is_dot).count();
    let ratio = dot as f64 / skills.len() as f64;
    if ratio >= 0.7 {
        BuildType::DoT
    } else if ratio >= 0.3 {
        BuildType::HybridDoT
    } else {
        BuildType::Hit
    }
}

/// Most common damage type among the skills, with its share of the typed ones.
/// Ties go to the type encountered first.
pub fn dominant_damage_type(skills: &[ScoredSkill]) -> Option<(&str, f64)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for damage_type in skills.iter().filter_map(|s| s.damage_type.as_deref()) {
        if damage_type.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(d, _)| *d == damage_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((damage_type, 1)),
        }
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let mut best: Option<(&str, usize)> = None;
    for (d, n) in counts {
        match best {
            Some((_, b)) if b >= n => {}
            _ => best = Some((d, n)),
        }
    }
    best.map(|(d, n)| (d, n as f64 / total as f64))
}
