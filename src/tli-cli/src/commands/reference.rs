//! Reference data command handlers

use anyhow::{bail, Result};
use tli::reference::{DAMAGE_TYPES, SKILL_TAG_SYNERGIES};
use tli::KnowledgeBase;

/// Handle `reference damage-types`
pub fn damage_types() {
    println!(
        "{:<10} {:<18} {:<9} Notes",
        "Type", "Ailment", "Priority"
    );
    for d in DAMAGE_TYPES {
        let bypass = if d.bypasses_resistance {
            " (bypasses resistance)"
        } else {
            ""
        };
        println!(
            "{:<10} {:<18} {:<9} {}{}",
            d.name, d.ailment, d.conversion_priority, d.description, bypass
        );
    }
    println!("\nDamage converts only from lower to higher priority.");
}

/// Handle `reference talents`
pub fn talents(knowledge: &KnowledgeBase) {
    for t in knowledge.talents() {
        println!(
            "{:<24} {:<10} {}",
            t.talent,
            t.build_focus.as_deref().unwrap_or("-"),
            t.core_mechanic.as_deref().unwrap_or("-")
        );
    }
}

/// Handle `reference talent`
pub fn talent(knowledge: &KnowledgeBase, name: &str) -> Result<()> {
    let Some(profile) = knowledge
        .talents()
        .find(|t| t.talent.eq_ignore_ascii_case(name))
    else {
        bail!("No mechanics profile for talent '{}'", name);
    };

    println!("Talent:       {}", profile.talent);
    println!("Hero:         {}", profile.hero.as_deref().unwrap_or("-"));
    println!("God type:     {}", profile.god_type.as_deref().unwrap_or("-"));
    println!("Core:         {}", profile.core_mechanic.as_deref().unwrap_or("-"));
    println!("Focus:        {}", profile.build_focus.as_deref().unwrap_or("-"));
    println!("Playstyle:    {}", profile.playstyle.as_deref().unwrap_or("-"));
    if let Some(desc) = &profile.description {
        println!("\n{}", desc);
    }
    print_list("Must have", &profile.must_have);
    print_list("Avoid", &profile.avoid);
    print_list("Skill types", &profile.recommended_skill_types);
    print_list("Item stats", &profile.recommended_item_stats);
    Ok(())
}

fn print_list(label: &str, values: &[String]) {
    if !values.is_empty() {
        println!("{:<13} {}", format!("{}:", label), values.join(", "));
    }
}

/// Handle `reference tags`
pub fn tags() {
    for s in SKILL_TAG_SYNERGIES {
        let speed = s.speed.map(|sp| format!(" [{}]", sp)).unwrap_or_default();
        println!("{}{}", s.tag, speed);
        println!("  recommended: {}", s.recommended_stats.join(", "));
        if !s.avoid_stats.is_empty() {
            println!("  avoid:       {}", s.avoid_stats.join(", "));
        }
    }
}
