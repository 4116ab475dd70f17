//! # tli
//!
//! Torchlight Infinite build recommendation library.
//!
//! This library provides:
//! - Mechanics reference data (damage types, ailments, tags, talent profiles)
//! - A catalog snapshot model (heroes, skills, items, talent nodes and levels)
//! - A deterministic, explainable build recommendation engine
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("share/catalog.json")?;
//! let catalog: tli::Catalog = serde_json::from_str(&json)?;
//! let knowledge = tli::KnowledgeBase::builtin();
//!
//! let request = tli::RecommendRequest::new(1).with_playstyle("Melee");
//! let build = tli::recommend_build(&catalog, &knowledge, &request)?;
//!
//! println!("{}", build.build_summary);
//! for skill in &build.recommended_skills {
//!     println!("{:>6.1}  {}  ({})", skill.score, skill.name, skill.reason);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod knowledge;
pub mod recommend;
pub mod reference;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, Hero, Item, Skill, TalentLevel, TalentNode};
#[doc(inline)]
pub use knowledge::{KnowledgeBase, KnowledgeError, TalentProfile};
#[doc(inline)]
pub use recommend::{
    recommend_build, BuildRecommendation, BuildType, QuickRecommendation, RecommendError,
    RecommendRequest, Recommender, ScoredItem, ScoredSkill, ScoredTalentNode,
};
#[doc(inline)]
pub use reference::{extract_level_mechanics, PrimaryStat};
