//! Item scoring and slot-balanced selection

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::classify::{dominant_damage_type, BuildType};
use super::score::ScoreCard;
use super::skills::ScoredSkill;
use crate::catalog::Item;
use crate::knowledge::{KnowledgeBase, TalentProfile};
use crate::reference::keywords::{
    first_keyword, mentions_any, BURST_ITEM_RULES, COMBO_EFFECT_KEYWORDS, CRIT_KEYWORDS,
    DOUBLE_DAMAGE_KEYWORDS, ITEM_DOT_KEYWORDS, SPELL_BURST_EFFECT_KEYWORDS,
};
use crate::reference::PrimaryStat;

/// Rarity tier that earns the rarity bonus
pub const TOP_RARITY: &str = "Legendary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item_id: i64,
    pub name: String,
    pub slot: String,
    pub item_type: String,
    pub rarity: String,
    pub stat_type: Option<String>,
    pub set_name: Option<String>,
    pub score: f64,
    pub reason: String,
}

/// Build-wide facts every item is scored against
#[derive(Debug, Clone)]
pub struct ItemContext<'a> {
    pub primary_stat: PrimaryStat,
    pub build_type: BuildType,
    pub dominant_damage: Option<&'a str>,
    pub dominant_ailment: Option<&'static str>,
    pub has_spell_burst: bool,
    pub has_combo: bool,
    pub talent: Option<&'a TalentProfile>,
}

impl<'a> ItemContext<'a> {
    pub fn new(
        primary_stat: PrimaryStat,
        build_type: BuildType,
        skills: &'a [ScoredSkill],
        talent: Option<&'a TalentProfile>,
        kb: &KnowledgeBase,
    ) -> Self {
        let dominant_damage = dominant_damage_type(skills).map(|(d, _)| d);
        Self {
            primary_stat,
            build_type,
            dominant_damage,
            dominant_ailment: dominant_damage.and_then(|d| kb.ailment_for(d)),
            has_spell_burst: skills.iter().any(|s| s.spell_burst_compatible),
            has_combo: skills.iter().any(|s| s.is_combo),
            talent,
        }
    }
}

fn effect_bonuses(card: &mut ScoreCard, effects: &str, ctx: &ItemContext<'_>) {
    if let Some(damage) = ctx.dominant_damage {
        if effects.contains(&damage.to_lowercase()) {
            card.add(10.0, format!("Boosts {}", damage));
        }
        if let Some(ailment) = ctx.dominant_ailment {
            if effects.contains(&ailment.to_lowercase()) {
                card.add(8.0, format!("{} synergy", ailment));
            }
        }
    }

    if ctx.build_type.is_dot_leaning() {
        if let Some(kw) = first_keyword(effects, ITEM_DOT_KEYWORDS) {
            card.add(12.0, format!("DoT scaling ({})", kw));
        }
        if mentions_any(effects, CRIT_KEYWORDS) {
            card.add(-5.0, "Crit is wasted on DoT");
        }
    } else {
        if mentions_any(effects, CRIT_KEYWORDS) {
            card.add(10.0, "Critical strike");
        }
        if mentions_any(effects, DOUBLE_DAMAGE_KEYWORDS) {
            card.add(8.0, "Double damage");
        }
    }

    if ctx.has_spell_burst && mentions_any(effects, SPELL_BURST_EFFECT_KEYWORDS) {
        card.add(15.0, "Spell Burst support");
    }
    if ctx.has_combo && mentions_any(effects, COMBO_EFFECT_KEYWORDS) {
        card.add(15.0, "Combo support");
    }

    if let Some(talent) = ctx.talent {
        for stat in &talent.recommended_item_stats {
            if effects.contains(&stat.to_lowercase()) {
                card.add(12.0, format!("Talent stat: {}", stat));
            }
        }
        if talent.is_burst() {
            for rule in BURST_ITEM_RULES {
                card.apply(rule, effects);
            }
        }
    }
}

/// Score one item
pub fn score_item(item: &Item, ctx: &ItemContext<'_>) -> ScoredItem {
    let mut card = ScoreCard::new();

    if item.has_affinity(ctx.primary_stat) {
        card.add(15.0, format!("{} affinity", ctx.primary_stat));
    }
    if item.rarity == TOP_RARITY {
        card.add(8.0, TOP_RARITY);
    }
    if item.in_set() {
        card.add(5.0, format!("{} set", item.set_name.as_deref().unwrap_or_default()));
    }

    if let Some(effects) = item.special_effects.as_deref().filter(|e| !e.is_empty()) {
        effect_bonuses(&mut card, &effects.to_lowercase(), ctx);
    }

    ScoredItem {
        item_id: item.id,
        name: item.name.clone(),
        slot: item.slot.clone(),
        item_type: item.item_type.clone(),
        rarity: item.rarity.clone(),
        stat_type: item.stat_type.clone(),
        set_name: item.set_name.clone(),
        score: card.score(),
        reason: card.reason_text(),
    }
}

/// Greedy pick in score order, at most one item per slot
pub fn select_slot_balanced(scored: Vec<ScoredItem>, max: usize) -> Vec<ScoredItem> {
    let mut used_slots: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();
    for item in scored {
        if selected.len() >= max {
            break;
        }
        if used_slots.insert(item.slot.clone()) {
            selected.push(item);
        }
    }
    selected
}

/// Score every item and select a slot-balanced set of at most `max`
pub fn recommend_items(items: &[Item], ctx: &ItemContext<'_>, max: usize) -> Vec<ScoredItem> {
    let mut scored: Vec<ScoredItem> = items.iter().map(|i| score_item(i, ctx)).collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    select_slot_balanced(scored, max)
}
