//! Talent tree node scoring

use serde::{Deserialize, Serialize};

use super::classify::BuildType;
use super::score::ScoreCard;
use crate::catalog::{Hero, TalentNode};
use crate::reference::keywords::{mentions_any, DOT_NODE_KEYWORDS, HIT_NODE_KEYWORDS};

/// Tier name and bonus, checked in order
const TIER_BONUSES: &[(&str, f64)] = &[("Legendary", 8.0), ("Large", 6.0), ("Medium", 4.0)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTalentNode {
    pub node_id: i64,
    pub name: String,
    pub node_type: String,
    pub tier: Option<String>,
    pub god_class: Option<String>,
    pub score: f64,
    pub reason: String,
}

pub fn score_talent_node(node: &TalentNode, hero: &Hero, build_type: BuildType) -> ScoredTalentNode {
    let mut card = ScoreCard::new();

    if node.node_type == "Core" {
        card.add(15.0, "Core node");
    } else {
        card.bump(5.0);
    }

    if let Some(class) = node.god_class.as_deref() {
        let god_type = hero.god_type.to_lowercase();
        if !god_type.is_empty() && class.to_lowercase().contains(&god_type) {
            card.add(12.0, format!("{} affinity", hero.god_type));
        }
    }

    if let Some(tier) = node.tier.as_deref() {
        if let Some((name, bonus)) = TIER_BONUSES.iter().find(|(name, _)| tier.contains(name)) {
            card.add(*bonus, format!("{} node", name));
        }
    }

    if let Some(effect) = node.effect.as_deref() {
        let effect = effect.to_lowercase();
        match build_type {
            BuildType::DoT | BuildType::HybridDoT if mentions_any(&effect, DOT_NODE_KEYWORDS) => {
                card.add(10.0, "DoT build synergy");
            }
            BuildType::Hit if mentions_any(&effect, HIT_NODE_KEYWORDS) => {
                card.add(10.0, "Hit build synergy");
            }
            _ => {}
        }
    }

    ScoredTalentNode {
        node_id: node.id,
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        tier: node.tier.clone(),
        god_class: node.god_class.clone(),
        score: card.score(),
        reason: card.reason_text(),
    }
}

/// Score every node, best first (ties keep catalog order), capped at `max`
pub fn recommend_talent_nodes(
    nodes: &[TalentNode],
    hero: &Hero,
    build_type: BuildType,
    max: usize,
) -> Vec<ScoredTalentNode> {
    let mut scored: Vec<ScoredTalentNode> = nodes
        .iter()
        .map(|n| score_talent_node(n, hero, build_type))
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(max);
    scored
}
