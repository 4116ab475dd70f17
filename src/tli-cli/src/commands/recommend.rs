//! Build recommendation command handlers

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tli::{BuildRecommendation, QuickRecommendation, RecommendRequest};

use super::helpers;
use crate::cli::OutputFormat;

/// Request for the given limits. The quick preset replaces the skill and item limits.
pub fn build_request(
    hero_id: i64,
    playstyle: Option<String>,
    focus: Option<String>,
    limits: (usize, usize, usize),
    quick: bool,
) -> RecommendRequest {
    let (max_skills, max_items, max_talents) = limits;
    let mut request = if quick {
        RecommendRequest::quick(hero_id)
    } else {
        RecommendRequest {
            max_skills,
            max_items,
            ..RecommendRequest::new(hero_id)
        }
    };
    request.max_talents = max_talents;
    request.playstyle = playstyle;
    request.focus = focus;
    request
}

/// Handle `recommend`
pub fn handle(
    db: &Path,
    knowledge_base: Option<&Path>,
    request: &RecommendRequest,
    quick: bool,
    format: OutputFormat,
) -> Result<()> {
    let catalog = helpers::load_catalog(db)?;
    let knowledge = helpers::load_knowledge(knowledge_base)?;

    let recommendation = tli::recommend_build(&catalog, &knowledge, request)
        .with_context(|| format!("No recommendation for hero {}", request.hero_id))?;

    let output = match (quick, format) {
        (true, OutputFormat::Json) => {
            serde_json::to_string_pretty(&QuickRecommendation::from(&recommendation))?
        }
        (false, OutputFormat::Json) => serde_json::to_string_pretty(&recommendation)?,
        (true, OutputFormat::Table) => render_quick(&QuickRecommendation::from(&recommendation)),
        (false, OutputFormat::Table) => render_table(&recommendation),
    };
    println!("{}", output);
    Ok(())
}

/// Full recommendation as a plain text report
pub fn render_table(rec: &BuildRecommendation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", rec.build_summary);
    let _ = writeln!(
        out,
        "God type: {}  Primary stat: {}  Synergy: {:.2}",
        rec.god_type, rec.primary_stat, rec.synergy_score
    );

    let _ = writeln!(out, "\nSkills:");
    let _ = writeln!(
        out,
        "  {:<4} {:<28} {:<10} {:<10} {:>7}  Reason",
        "Pri", "Name", "Category", "Damage", "Score"
    );
    for s in &rec.recommended_skills {
        let _ = writeln!(
            out,
            "  {:<4} {:<28} {:<10} {:<10} {:>7.1}  {}",
            s.priority,
            s.name,
            s.category,
            s.damage_type.as_deref().unwrap_or("-"),
            s.score,
            s.reason
        );
    }

    let _ = writeln!(out, "\nItems:");
    let _ = writeln!(
        out,
        "  {:<12} {:<28} {:<10} {:>7}  Reason",
        "Slot", "Name", "Rarity", "Score"
    );
    for i in &rec.recommended_items {
        let _ = writeln!(
            out,
            "  {:<12} {:<28} {:<10} {:>7.1}  {}",
            i.slot, i.name, i.rarity, i.score, i.reason
        );
    }

    if !rec.recommended_talents.is_empty() {
        let _ = writeln!(out, "\nTalent nodes:");
        for t in &rec.recommended_talents {
            let _ = writeln!(
                out,
                "  {:<28} {:<10} {:>7.1}  {}",
                t.name,
                t.tier.as_deref().unwrap_or("-"),
                t.score,
                t.reason
            );
        }
    }

    if !rec.playstyle_tips.is_empty() {
        let _ = writeln!(out, "\nTips:");
        for tip in &rec.playstyle_tips {
            let _ = writeln!(out, "  - {}", tip);
        }
    }

    out.trim_end().to_string()
}

/// Quick view as plain text
pub fn render_quick(quick: &QuickRecommendation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", quick.hero_name, quick.talent);
    let _ = writeln!(
        out,
        "{} build, {} primary, synergy {:.2}",
        quick.build_type, quick.primary_stat, quick.synergy_score
    );
    let _ = writeln!(out, "{}", quick.build_summary);

    let _ = writeln!(out, "\nTop skills:");
    for s in &quick.top_skills {
        let dot = if s.is_dot { " [DoT]" } else { "" };
        let _ = writeln!(out, "  {} ({}){} - {}", s.name, s.category, dot, s.reason);
    }

    let _ = writeln!(out, "\nTop items:");
    for i in &quick.top_items {
        let _ = writeln!(out, "  {} [{}] - {}", i.name, i.slot, i.reason);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tli::{Catalog, Hero, Item, KnowledgeBase, Skill};

    fn catalog() -> Catalog {
        Catalog {
            heroes: vec![Hero {
                id: 1,
                name: "Rehan".to_string(),
                god_type: "Berserker".to_string(),
                talent: "Anger".to_string(),
                description: None,
            }],
            skills: vec![Skill {
                id: 1,
                name: "Whirlwind".to_string(),
                category: "Active".to_string(),
                tags: vec!["Melee".to_string(), "Attack".to_string(), "AoE".to_string()],
                damage_type: Some("Physical".to_string()),
                ..Default::default()
            }],
            items: vec![Item {
                id: 1,
                name: "Rage Helm".to_string(),
                item_type: "Armor".to_string(),
                slot: "Head".to_string(),
                rarity: "Legendary".to_string(),
                stat_type: Some("STR".to_string()),
                special_effects: Some("+20% Attack Speed".to_string()),
                set_name: None,
            }],
            ..Default::default()
        }
    }

    fn recommendation(quick: bool) -> BuildRecommendation {
        let request = build_request(1, None, None, (6, 10, 5), quick);
        tli::recommend_build(&catalog(), &KnowledgeBase::builtin(), &request).unwrap()
    }

    #[test]
    fn test_build_request_quick_preset() {
        let request = build_request(
            2,
            Some("Melee".to_string()),
            Some("boss".to_string()),
            (8, 12, 3),
            true,
        );
        assert_eq!((request.max_skills, request.max_items), (4, 6));
        assert_eq!(request.max_talents, 3);
        assert_eq!(request.playstyle.as_deref(), Some("Melee"));
        assert_eq!(request.focus.as_deref(), Some("boss"));

        let full = build_request(2, None, None, (8, 12, 3), false);
        assert_eq!((full.max_skills, full.max_items, full.max_talents), (8, 12, 3));
    }

    #[test]
    fn test_render_table_lists_picks() {
        let text = render_table(&recommendation(false));
        assert!(text.starts_with("Rehan (Anger)"));
        assert!(text.contains("Whirlwind"));
        assert!(text.contains("Rage Helm"));
        assert!(text.contains("Primary stat: STR"));
    }

    #[test]
    fn test_render_quick() {
        let rec = recommendation(true);
        let text = render_quick(&QuickRecommendation::from(&rec));
        assert!(text.starts_with("Rehan (Anger)"));
        assert!(text.contains("Top skills:"));
        assert!(text.contains("Rage Helm [Head]"));
    }
}
