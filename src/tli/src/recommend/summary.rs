//! Build summary text, playstyle tips and the condensed quick view

use serde::{Deserialize, Serialize};

use super::classify::{dominant_damage_type, BuildType};
use super::items::ScoredItem;
use super::skills::ScoredSkill;
use super::BuildRecommendation;
use crate::catalog::Hero;
use crate::knowledge::KnowledgeBase;

/// Entries shown per list in a quick recommendation
pub const QUICK_TOP: usize = 3;

/// One-line deterministic description of a build
pub fn build_summary(
    hero: &Hero,
    skills: &[ScoredSkill],
    items: &[ScoredItem],
    build_type: BuildType,
    kb: &KnowledgeBase,
) -> String {
    let dominant = dominant_damage_type(skills).map(|(d, _)| d);
    let mut summary = format!(
        "{} ({}) - {} build | {} damage",
        hero.name,
        hero.talent,
        build_type,
        dominant.unwrap_or("Mixed")
    );

    if let Some(ailment) = dominant.and_then(|d| kb.ailment_for(d)) {
        summary.push_str(&format!(" | {} ailment", ailment));
    }

    let set_count = items
        .iter()
        .filter(|i| i.set_name.as_deref().is_some_and(|s| !s.trim().is_empty()))
        .count();
    if set_count > 0 {
        summary.push_str(&format!(" | {} set items", set_count));
    }

    if skills.iter().any(|s| s.spell_burst_compatible) {
        summary.push_str(" | Spell Burst");
    }
    if skills.iter().any(|s| s.is_combo) {
        summary.push_str(" | Combo");
    }
    summary
}

/// Play advice for a build type, with an extra line for some DoT damage types
pub fn playstyle_tips(build_type: BuildType, dominant_damage: Option<&str>) -> Vec<&'static str> {
    let mut tips = match build_type {
        BuildType::DoT => vec![
            "Apply ailments quickly and let damage over time do the work",
            "Prioritize Affliction and Reaping stats for maximum DoT damage",
            "Critical Strike is less valuable, focus on DoT modifiers instead",
        ],
        BuildType::Hit => vec![
            "Maximize Critical Strike Chance and Damage for burst",
            "Look for Multistrike to gain free extra attacks",
            "Attack speed and hit damage are your priority stats",
        ],
        BuildType::HybridDoT => vec![
            "Balance between Hit damage and DoT scaling",
            "Use hits to apply ailments, then let DoT finish enemies",
            "Prioritize skills that benefit from both playstyles",
        ],
        BuildType::Unknown => Vec::new(),
    };

    if build_type == BuildType::DoT {
        match dominant_damage {
            Some("Fire") => tips.push("Ignite doesn't stack, use high single-hit damage skills"),
            Some("Erosion") => tips.push("Wilt stacks without limit, attack as fast as possible"),
            Some("Physical") => tips.push("Use Reaping to instantly deal Trauma damage"),
            _ => {}
        }
    }
    tips
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSkill {
    pub name: String,
    pub category: String,
    pub damage_type: Option<String>,
    pub is_dot: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickItem {
    pub name: String,
    pub slot: String,
    pub reason: String,
}

/// Condensed view of a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickRecommendation {
    pub hero_name: String,
    pub talent: String,
    pub build_type: BuildType,
    pub primary_stat: String,
    pub build_summary: String,
    pub synergy_score: f64,
    pub top_skills: Vec<QuickSkill>,
    pub top_items: Vec<QuickItem>,
}

impl From<&BuildRecommendation> for QuickRecommendation {
    fn from(rec: &BuildRecommendation) -> Self {
        Self {
            hero_name: rec.hero_name.clone(),
            talent: rec.hero_talent.clone(),
            build_type: rec.build_type,
            primary_stat: rec.primary_stat.to_string(),
            build_summary: rec.build_summary.clone(),
            synergy_score: rec.synergy_score,
            top_skills: rec
                .recommended_skills
                .iter()
                .take(QUICK_TOP)
                .map(|s| QuickSkill {
                    name: s.name.clone(),
                    category: s.category.clone(),
                    damage_type: s.damage_type.clone(),
                    is_dot: s.is_dot,
                    reason: s.reason.clone(),
                })
                .collect(),
            top_items: rec
                .recommended_items
                .iter()
                .take(QUICK_TOP)
                .map(|i| QuickItem {
                    name: i.name.clone(),
                    slot: i.slot.clone(),
                    reason: i.reason.clone(),
                })
                .collect(),
        }
    }
}
