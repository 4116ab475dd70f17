//! Skill scoring
//!
//! Every catalog skill is scored against the hero profile by independent,
//! additive signals. The heaviest signals come from the talent's mechanics
//! profile: must-have mechanics, avoid penalties and, for burst talents, the
//! melee+attack trigger and the pivotal-level penalty.

use serde::{Deserialize, Serialize};

use super::levels::TalentLevelProfile;
use super::score::{priority_tier, ScoreCard};
use crate::catalog::{Hero, Skill};
use crate::knowledge::{KnowledgeBase, TalentProfile};
use crate::reference::keywords::{mentions_any, DOT_SKILL_KEYWORDS, LATE_LEVEL_SKILL_MECHANICS};
use crate::reference::{is_combo_skill, is_spell_burst_compatible, PrimaryStat};

/// Everything about the hero the scorers need
#[derive(Debug, Clone)]
pub struct HeroProfile<'a> {
    pub hero: &'a Hero,
    pub primary_stat: PrimaryStat,
    /// Preferred damage types, best first
    pub preferred_damage: &'static [&'static str],
    /// Mechanics profile, when the talent has one
    pub talent: Option<&'a TalentProfile>,
    pub levels: &'a TalentLevelProfile,
}

/// A skill with its score and explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill_id: i64,
    pub name: String,
    pub category: String,
    pub damage_type: Option<String>,
    pub tags: Vec<String>,
    pub is_dot: bool,
    pub spell_burst_compatible: bool,
    pub is_combo: bool,
    pub score: f64,
    pub reason: String,
    pub priority: u8,
}

/// Whether a skill deals damage over time, judged from tags and description
pub fn is_dot_skill(skill: &Skill) -> bool {
    let in_tags = skill
        .tags
        .iter()
        .any(|t| mentions_any(&t.to_lowercase(), DOT_SKILL_KEYWORDS));
    in_tags
        || skill
            .description
            .as_deref()
            .is_some_and(|d| mentions_any(&d.to_lowercase(), DOT_SKILL_KEYWORDS))
}

struct TagFlags {
    melee: bool,
    attack: bool,
    area: bool,
}

impl TagFlags {
    fn new(tags_lower: &[String]) -> Self {
        let any = |kws: &[&str]| tags_lower.iter().any(|t| mentions_any(t, kws));
        Self {
            melee: any(&["melee"]),
            attack: any(&["attack"]),
            area: any(&["aoe", "area"]),
        }
    }

    fn melee_attack(&self) -> bool {
        self.melee && self.attack
    }
}

fn category_bonus(card: &mut ScoreCard, category: &str) {
    let kind = category.split_whitespace().next().unwrap_or_default();
    if kind.eq_ignore_ascii_case("active") {
        card.add(15.0, "Active skill");
    } else if kind.eq_ignore_ascii_case("support") {
        card.add(8.0, "Support skill");
    }
}

fn damage_type_bonus(
    card: &mut ScoreCard,
    damage_type: &str,
    profile: &HeroProfile<'_>,
    kb: &KnowledgeBase,
) {
    card.add(5.0, format!("{} damage", damage_type));

    if let Some(rank) = profile
        .preferred_damage
        .iter()
        .position(|d| d.eq_ignore_ascii_case(damage_type))
    {
        card.add(
            10.0 - 2.0 * rank as f64,
            format!("Preferred damage for {}", profile.hero.god_type),
        );
    }

    if let Some(ailment) = kb.ailment_for(damage_type) {
        card.add(3.0, format!("Inflicts {}", ailment));
    }
}

fn talent_alignment(
    card: &mut ScoreCard,
    skill: &Skill,
    tags_lower: &[String],
    flags: &TagFlags,
    is_dot: bool,
    talent: &TalentProfile,
    levels: &TalentLevelProfile,
) {
    let category = skill.category.to_lowercase();
    let description = skill
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let in_category_or_tags =
        |kw: &str| category.contains(kw) || tags_lower.iter().any(|t| t.contains(kw));

    for must in &talent.must_have {
        let lower = must.to_lowercase();
        if in_category_or_tags(&lower) {
            card.add(20.0, format!("Talent core: {}", must));
        } else if description.contains(&lower) {
            card.add(10.0, format!("Talent hint: {}", must));
        }
    }

    for avoid in &talent.avoid {
        let lower = avoid.to_lowercase();
        if lower.contains("dot") && is_dot {
            card.add(-25.0, "Talent avoids DoT");
        }
        if lower.contains("spell") && tags_lower.iter().any(|t| t.contains("spell")) {
            card.add(-20.0, "Talent avoids Spell");
        }
        if lower.contains("non-burst") && !flags.melee_attack() {
            card.add(-30.0, "Cannot trigger Burst");
        }
    }

    for kind in &talent.recommended_skill_types {
        if in_category_or_tags(&kind.to_lowercase()) {
            card.add(15.0, format!("Talent fit: {}", kind));
        }
    }

    if talent.is_burst() {
        if flags.melee_attack() {
            card.add(25.0, "Burst trigger (Melee Attack)");
        }
        if flags.area {
            card.add(15.0, "Burst amplifier (Area)");
        }
        if levels.has_pivotal_penalty && !flags.melee_attack() {
            card.add(-40.0, "Level 60 penalty: not Burst eligible");
        }
    }

    for (level, mechanic) in levels.late_mechanics() {
        if LATE_LEVEL_SKILL_MECHANICS.contains(&mechanic)
            && tags_lower.iter().any(|t| t.contains(mechanic))
        {
            card.add(5.0, format!("Lv{} mechanic: {}", level, mechanic));
        }
    }
}

/// Score one skill against the hero profile
pub fn score_skill(
    skill: &Skill,
    profile: &HeroProfile<'_>,
    playstyle: Option<&str>,
    kb: &KnowledgeBase,
) -> ScoredSkill {
    let mut card = ScoreCard::new();
    let tags_lower: Vec<String> = skill.tags.iter().map(|t| t.to_lowercase()).collect();
    let flags = TagFlags::new(&tags_lower);

    category_bonus(&mut card, &skill.category);

    let is_dot = is_dot_skill(skill);
    if is_dot {
        card.add(5.0, "DoT skill");
    } else {
        card.add(3.0, "Hit skill");
    }

    if let Some(damage_type) = skill.damage_type.as_deref().filter(|d| !d.is_empty()) {
        damage_type_bonus(&mut card, damage_type, profile, kb);
    }

    if let Some(style) = playstyle.map(str::trim).filter(|s| !s.is_empty()) {
        let style_lower = style.to_lowercase();
        if tags_lower.iter().any(|t| t.contains(&style_lower)) {
            card.add(10.0, format!("Matches {} playstyle", style));
        }
    }

    let synergy_stats = kb.tag_stats(&skill.tags).len();
    if synergy_stats > 0 {
        card.add(
            0.5 * synergy_stats as f64,
            format!("{} synergy stats", synergy_stats),
        );
    }

    let spell_burst = is_spell_burst_compatible(&skill.tags);
    if spell_burst {
        card.add(5.0, "Spell Burst compatible");
    }
    let combo = is_combo_skill(&skill.tags);
    if combo {
        card.add(7.0, "Combo skill");
    }

    if let Some(talent) = profile.talent {
        talent_alignment(
            &mut card,
            skill,
            &tags_lower,
            &flags,
            is_dot,
            talent,
            profile.levels,
        );
    }

    if skill.description.as_deref().is_some_and(|d| d.chars().count() > 100) {
        card.bump(2.0);
    }

    ScoredSkill {
        skill_id: skill.id,
        name: skill.name.clone(),
        category: skill.category.clone(),
        damage_type: skill.damage_type.clone(),
        tags: skill.tags.clone(),
        is_dot,
        spell_burst_compatible: spell_burst,
        is_combo: combo,
        score: card.score(),
        reason: card.reason_text(),
        priority: priority_tier(card.score()),
    }
}

/// Score every skill, best first (ties keep catalog order), capped at `max`
pub fn score_skills(
    skills: &[Skill],
    profile: &HeroProfile<'_>,
    playstyle: Option<&str>,
    kb: &KnowledgeBase,
    max: usize,
) -> Vec<ScoredSkill> {
    let mut scored: Vec<ScoredSkill> = skills
        .iter()
        .map(|s| score_skill(s, profile, playstyle, kb))
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(max);
    scored
}
