//! Hero listing command handler

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tli::{Hero, KnowledgeBase};
use tli_idb::CatalogRepository;

use super::helpers;
use crate::cli::OutputFormat;

/// One row of the hero listing
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HeroRow {
    pub id: i64,
    pub name: String,
    pub god_type: String,
    pub talent: String,
    pub primary_stat: String,
    pub has_profile: bool,
}

pub fn hero_rows(heroes: &[Hero], knowledge: &KnowledgeBase) -> Vec<HeroRow> {
    heroes
        .iter()
        .map(|h| HeroRow {
            id: h.id,
            name: h.name.clone(),
            god_type: h.god_type.clone(),
            talent: h.talent.clone(),
            primary_stat: knowledge.primary_stat(&h.god_type).to_string(),
            has_profile: knowledge.talent(&h.talent).is_some(),
        })
        .collect()
}

/// Handle `heroes`
pub fn handle(db: &Path, knowledge_base: Option<&Path>, format: OutputFormat) -> Result<()> {
    let wdb = helpers::open_catalog_db(db)?;
    let knowledge = helpers::load_knowledge(knowledge_base)?;
    let rows = hero_rows(&wdb.list_heroes()?, &knowledge);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No heroes in the catalog");
                return Ok(());
            }
            println!(
                "{:>4}  {:<16} {:<20} {:<24} {:<4} Profile",
                "ID", "Name", "God type", "Talent", "Stat"
            );
            for r in &rows {
                println!(
                    "{:>4}  {:<16} {:<20} {:<24} {:<4} {}",
                    r.id,
                    r.name,
                    r.god_type,
                    r.talent,
                    r.primary_stat,
                    if r.has_profile { "yes" } else { "-" }
                );
            }
            println!("\n{} heroes", rows.len());
        }
    }
    Ok(())
}
