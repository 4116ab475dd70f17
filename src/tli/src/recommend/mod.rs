//! Rule-based build recommendation
//!
//! Scoring runs in a fixed order: skills, build classification, items,
//! talent nodes, synergy. Every scorer takes the [`KnowledgeBase`] and the
//! catalog snapshot by reference; the only mutable state is the talent level
//! cache owned by one [`Recommender`].
//!
//! [`KnowledgeBase`]: crate::KnowledgeBase

mod classify;
mod engine;
mod items;
mod levels;
mod score;
mod skills;
mod summary;
mod synergy;
mod talents;

use serde::{Deserialize, Serialize};

pub use classify::{classify_build, dominant_damage_type, BuildType};
pub use engine::{recommend_build, Recommender};
pub use items::{recommend_items, score_item, select_slot_balanced, ItemContext, ScoredItem};
pub use levels::{parse_mechanics, TalentLevelExtractor, TalentLevelProfile};
pub use score::{priority_tier, ScoreCard, BASELINE_REASON};
pub use skills::{is_dot_skill, score_skill, score_skills, HeroProfile, ScoredSkill};
pub use summary::{build_summary, playstyle_tips, QuickItem, QuickRecommendation, QuickSkill};
pub use synergy::{synergy_score, MAX_SYNERGY};
pub use talents::{recommend_talent_nodes, score_talent_node, ScoredTalentNode};

use crate::reference::PrimaryStat;

pub const DEFAULT_MAX_SKILLS: usize = 6;
pub const DEFAULT_MAX_ITEMS: usize = 10;
pub const DEFAULT_MAX_TALENTS: usize = 5;
pub const QUICK_MAX_SKILLS: usize = 4;
pub const QUICK_MAX_ITEMS: usize = 6;

/// Error type for recommendation requests
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Hero not found: {0}")]
    HeroNotFound(i64),
}

pub type Result<T> = std::result::Result<T, RecommendError>;

/// Parameters of one recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub hero_id: i64,
    #[serde(default)]
    pub playstyle: Option<String>,
    /// Carried and logged, not scored
    #[serde(default)]
    pub focus: Option<String>,
    pub max_skills: usize,
    pub max_items: usize,
    pub max_talents: usize,
}

impl RecommendRequest {
    pub fn new(hero_id: i64) -> Self {
        Self {
            hero_id,
            playstyle: None,
            focus: None,
            max_skills: DEFAULT_MAX_SKILLS,
            max_items: DEFAULT_MAX_ITEMS,
            max_talents: DEFAULT_MAX_TALENTS,
        }
    }

    /// Smaller preset backing the quick view
    pub fn quick(hero_id: i64) -> Self {
        Self {
            max_skills: QUICK_MAX_SKILLS,
            max_items: QUICK_MAX_ITEMS,
            ..Self::new(hero_id)
        }
    }

    pub fn with_playstyle(mut self, playstyle: impl Into<String>) -> Self {
        self.playstyle = Some(playstyle.into());
        self
    }

    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }
}

/// Complete recommendation for one hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecommendation {
    pub hero_id: i64,
    pub hero_name: String,
    pub hero_talent: String,
    pub god_type: String,
    pub primary_stat: PrimaryStat,
    pub build_type: BuildType,
    pub recommended_skills: Vec<ScoredSkill>,
    pub recommended_items: Vec<ScoredItem>,
    pub recommended_talents: Vec<ScoredTalentNode>,
    pub synergy_score: f64,
    pub build_summary: String,
    #[serde(default)]
    pub playstyle_tips: Vec<String>,
}
