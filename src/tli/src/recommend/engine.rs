//! Per-request recommendation engine

use super::classify::{classify_build, dominant_damage_type};
use super::items::{recommend_items, ItemContext};
use super::levels::TalentLevelExtractor;
use super::skills::{score_skills, HeroProfile};
use super::summary::{build_summary, playstyle_tips};
use super::synergy::synergy_score;
use super::talents::recommend_talent_nodes;
use super::{BuildRecommendation, RecommendError, RecommendRequest, Result};
use crate::catalog::Catalog;
use crate::knowledge::KnowledgeBase;

/// Recommendation engine over one catalog snapshot.
///
/// Construct one per request (or per batch of requests against the same
/// snapshot). The talent level cache lives and dies with the instance.
#[derive(Debug)]
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    knowledge: &'a KnowledgeBase,
    levels: TalentLevelExtractor<'a>,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog, knowledge: &'a KnowledgeBase) -> Self {
        Self {
            catalog,
            knowledge,
            levels: TalentLevelExtractor::new(catalog),
        }
    }

    /// Recommend a build. Fails only when the hero is not in the catalog.
    pub fn recommend(&mut self, request: &RecommendRequest) -> Result<BuildRecommendation> {
        let catalog = self.catalog;
        let kb = self.knowledge;

        let hero = catalog
            .hero(request.hero_id)
            .ok_or(RecommendError::HeroNotFound(request.hero_id))?;
        let primary_stat = kb.primary_stat(&hero.god_type);
        let talent = kb.talent(&hero.talent);
        if talent.is_none() {
            tracing::debug!(talent = %hero.talent, "no mechanics profile for talent");
        }
        if let Some(focus) = request.focus.as_deref() {
            tracing::debug!(focus, "focus requested");
        }

        let profile = HeroProfile {
            hero,
            primary_stat,
            preferred_damage: kb.preferred_damage_types(primary_stat, &hero.god_type),
            talent,
            levels: self.levels.profile(&hero.talent),
        };

        let skills = score_skills(
            &catalog.skills,
            &profile,
            request.playstyle.as_deref(),
            kb,
            request.max_skills,
        );
        let build_type = classify_build(&skills);

        let item_ctx = ItemContext::new(primary_stat, build_type, &skills, talent, kb);
        let items = recommend_items(&catalog.items, &item_ctx, request.max_items);
        let talents =
            recommend_talent_nodes(&catalog.talent_nodes, hero, build_type, request.max_talents);

        let synergy = synergy_score(&skills, &items, build_type);
        let summary = build_summary(hero, &skills, &items, build_type, kb);
        let tips = playstyle_tips(build_type, dominant_damage_type(&skills).map(|(d, _)| d))
            .into_iter()
            .map(String::from)
            .collect();

        tracing::debug!(
            hero = %hero.name,
            build_type = %build_type,
            skills = skills.len(),
            items = items.len(),
            talents = talents.len(),
            synergy,
            "recommendation assembled"
        );

        Ok(BuildRecommendation {
            hero_id: hero.id,
            hero_name: hero.name.clone(),
            hero_talent: hero.talent.clone(),
            god_type: hero.god_type.clone(),
            primary_stat,
            build_type,
            recommended_skills: skills,
            recommended_items: items,
            recommended_talents: talents,
            synergy_score: synergy,
            build_summary: summary,
            playstyle_tips: tips,
        })
    }
}

/// Recommend a build with a fresh engine instance
pub fn recommend_build(
    catalog: &Catalog,
    knowledge: &KnowledgeBase,
    request: &RecommendRequest,
) -> Result<BuildRecommendation> {
    Recommender::new(catalog, knowledge).recommend(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Hero, Item, Skill, TalentLevel, TalentNode};
    use crate::recommend::{BuildType, QuickRecommendation, MAX_SYNERGY};
    use std::collections::HashSet;

    fn hero(id: i64, name: &str, god_type: &str, talent: &str) -> Hero {
        Hero {
            id,
            name: name.to_string(),
            god_type: god_type.to_string(),
            talent: talent.to_string(),
            description: None,
        }
    }

    fn skill(id: i64, name: &str, tags: &[&str], damage_type: &str, description: &str) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            category: "Active Skill".to_string(),
            description: Some(description.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            damage_type: Some(damage_type.to_string()),
            ..Default::default()
        }
    }

    fn item(id: i64, slot: &str, rarity: &str, stat: &str, effects: &str) -> Item {
        Item {
            id,
            name: format!("{} {}", slot, id),
            item_type: "Gear".to_string(),
            slot: slot.to_string(),
            rarity: rarity.to_string(),
            stat_type: Some(stat.to_string()),
            special_effects: Some(effects.to_string()),
            set_name: None,
        }
    }

    fn fixture() -> Catalog {
        Catalog {
            heroes: vec![
                hero(1, "Rehan", "Berserker", "Anger"),
                hero(2, "Gemma", "Mage", "Frostbitten Heart"),
                hero(3, "Carino", "Divineshot", "Ranger of Glory"),
            ],
            skills: vec![
                skill(1, "Whirlwind Strike", &["Melee", "Attack", "AoE"], "Physical", "Spin and strike"),
                skill(2, "Frost Nova", &["Spell", "AoE"], "Cold", "A ring of frost"),
                skill(3, "Blazing Trail", &["Spell", "DoT"], "Fire", "Leaves burning ground"),
                skill(4, "Leap Slam", &["Melee", "Attack"], "Physical", "Jump and slam"),
                skill(5, "Arrow Rain", &["Projectile", "Attack", "AoE"], "Physical", "Arrows fall"),
                skill(6, "Venom Cloud", &["Spell", "Poison"], "Erosion", "Poison per second"),
                skill(7, "Thunder Combo", &["Melee", "Combo"], "Lightning", "Combo finisher"),
                skill(8, "Shadow Bolt", &["Spell", "Projectile"], "Cold", "Bolt of shadow"),
            ],
            items: vec![
                item(1, "Head", "Legendary", "STR", "+20% Attack Speed, +10% Critical Strike"),
                item(2, "Head", "Rare", "STR", "+5% Physical Damage"),
                item(3, "Chest", "Legendary", "INT", "+20% Cold Damage, Freeze lasts longer"),
                item(4, "Gloves", "Rare", "DEX", "+12% Projectile Speed"),
                item(5, "Gloves", "Legendary", "STR", "+15% Melee Damage, Rage on hit"),
                item(6, "Boots", "Magic", "INT", "+10% Movement Speed"),
                item(7, "Ring", "Legendary", "INT", "Spell Burst charges faster"),
                item(8, "Neck", "Rare", "STR", "Affliction +15%"),
            ],
            talent_nodes: vec![
                TalentNode {
                    id: 1,
                    name: "Warlord".to_string(),
                    node_type: "Core".to_string(),
                    god_class: Some("Berserker".to_string()),
                    tier: Some("Legendary".to_string()),
                    effect: Some("+20% Critical Strike Damage".to_string()),
                },
                TalentNode {
                    id: 2,
                    name: "Patience".to_string(),
                    node_type: "Regular".to_string(),
                    god_class: None,
                    tier: Some("Medium".to_string()),
                    effect: Some("+10% Affliction".to_string()),
                },
            ],
            talent_levels: vec![
                TalentLevel {
                    talent_name: "Anger".to_string(),
                    level: 60,
                    effect_name: "Tunnel Vision".to_string(),
                    effect_description: Some("-80% damage for non-Burst skills".to_string()),
                    mechanics: Some(r#"["burst","damage_penalty","level_60_critical"]"#.to_string()),
                },
                TalentLevel {
                    talent_name: "Anger".to_string(),
                    level: 72,
                    effect_name: "Bloodlust".to_string(),
                    effect_description: Some("Melee hits grant Rage".to_string()),
                    mechanics: Some("{broken".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_limits_and_slot_uniqueness_for_all_heroes() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        for hero in &catalog.heroes {
            for (max_skills, max_items) in [(1, 1), (3, 2), (6, 10), (20, 20)] {
                let mut req = RecommendRequest::new(hero.id);
                req.max_skills = max_skills;
                req.max_items = max_items;
                let rec = recommend_build(&catalog, &kb, &req).unwrap();
                assert!(rec.recommended_skills.len() <= max_skills);
                assert!(rec.recommended_items.len() <= max_items);
                assert!(rec.recommended_talents.len() <= req.max_talents);

                let slots: HashSet<&str> =
                    rec.recommended_items.iter().map(|i| i.slot.as_str()).collect();
                assert_eq!(slots.len(), rec.recommended_items.len());
                assert!((0.0..=MAX_SYNERGY).contains(&rec.synergy_score));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        let req = RecommendRequest::new(1).with_playstyle("Melee");
        let first = serde_json::to_string(&recommend_build(&catalog, &kb, &req).unwrap()).unwrap();
        let second = serde_json::to_string(&recommend_build(&catalog, &kb, &req).unwrap()).unwrap();
        assert_eq!(first, second);

        // a reused engine answers from its level cache identically
        let mut engine = Recommender::new(&catalog, &kb);
        let a = engine.recommend(&req).unwrap();
        let b = engine.recommend(&req).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), first);
    }

    #[test]
    fn test_unknown_hero() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        let err = recommend_build(&catalog, &kb, &RecommendRequest::new(99)).unwrap_err();
        assert!(matches!(err, RecommendError::HeroNotFound(99)));
    }

    #[test]
    fn test_burst_talent_penalizes_spells() {
        let catalog = Catalog {
            skills: vec![
                skill(1, "Slam", &["Melee", "Attack"], "Physical", "Hits hard"),
                skill(2, "Bolt", &["Spell"], "Physical", "Hits hard"),
            ],
            ..fixture()
        };
        let kb = KnowledgeBase::builtin();
        let rec = recommend_build(&catalog, &kb, &RecommendRequest::new(1)).unwrap();
        let melee = &rec.recommended_skills[0];
        let spell = &rec.recommended_skills[1];
        assert_eq!(melee.name, "Slam");
        assert!(melee.score - spell.score >= 60.0);
        assert!(spell.reason.contains("Level 60 penalty"));
        assert_eq!(melee.priority, 1);
        assert_eq!(spell.priority, 4);
    }

    #[test]
    fn test_head_slot_keeps_higher_score() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        let mut req = RecommendRequest::new(1);
        req.max_items = 1;
        let rec = recommend_build(&catalog, &kb, &req).unwrap();
        assert_eq!(rec.recommended_items.len(), 1);
        assert_eq!(rec.recommended_items[0].item_id, 1);

        let rec = recommend_build(&catalog, &kb, &RecommendRequest::new(1)).unwrap();
        let heads: Vec<i64> = rec
            .recommended_items
            .iter()
            .filter(|i| i.slot == "Head")
            .map(|i| i.item_id)
            .collect();
        assert_eq!(heads, vec![1]);
    }

    #[test]
    fn test_build_type_from_selected_skills() {
        let dot = |id| skill(id, "Rot", &["DoT"], "Erosion", "Wilt stacks");
        let hit = |id| skill(id, "Cut", &["Melee"], "Physical", "A clean cut");
        for (dots, expected) in [(7, BuildType::DoT), (3, BuildType::HybridDoT), (2, BuildType::Hit)] {
            let skills = (0..10)
                .map(|i| if i < dots { dot(i) } else { hit(i) })
                .collect();
            let catalog = Catalog {
                skills,
                ..fixture()
            };
            let mut req = RecommendRequest::new(2);
            req.max_skills = 10;
            let rec = recommend_build(&catalog, &KnowledgeBase::builtin(), &req).unwrap();
            assert_eq!(rec.build_type, expected);
        }
    }

    #[test]
    fn test_hero_without_profile_still_recommends() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        let rec = recommend_build(&catalog, &kb, &RecommendRequest::new(2)).unwrap();
        assert_eq!(rec.primary_stat.code(), "INT");
        assert!(!rec.recommended_skills.iter().any(|s| s.reason.contains("Talent")));
        assert!(rec.build_summary.starts_with("Gemma (Frostbitten Heart) - "));
    }

    #[test]
    fn test_empty_catalog_sections() {
        let catalog = Catalog {
            heroes: fixture().heroes,
            ..Default::default()
        };
        let rec = recommend_build(&catalog, &KnowledgeBase::builtin(), &RecommendRequest::new(3))
            .unwrap();
        assert_eq!(rec.build_type, BuildType::Unknown);
        assert!(rec.recommended_items.is_empty());
        assert_eq!(rec.synergy_score, 0.0);
        assert!(rec.build_summary.contains("Mixed damage"));
    }

    #[test]
    fn test_quick_view() {
        let catalog = fixture();
        let kb = KnowledgeBase::builtin();
        let rec = recommend_build(&catalog, &kb, &RecommendRequest::quick(1)).unwrap();
        assert!(rec.recommended_skills.len() <= 4);
        assert!(rec.recommended_items.len() <= 6);

        let quick = QuickRecommendation::from(&rec);
        assert_eq!(quick.top_skills.len(), 3);
        assert_eq!(quick.top_items.len(), 3);
        assert_eq!(quick.talent, "Anger");
        assert_eq!(quick.top_skills[0].name, rec.recommended_skills[0].name);
    }
}
