//! Mechanics reference data for Torchlight Infinite
//!
//! Hardcoded reference data for damage types, ailments, damage forms, skill
//! tags, primary stats, special skill mechanics and talent profiles, plus the
//! keyword tables used to classify free text. Everything here is immutable;
//! [`crate::KnowledgeBase`] bundles it for the scorers.

pub mod ailment;
pub mod damage;
pub mod forms;
pub mod keywords;
pub mod mechanics;
pub mod stats;
pub mod tags;
pub mod talents;

pub use ailment::{
    ailment_by_name, is_dot_ailment, scales_by_stacking, Ailment, AilmentForm, AILMENTS,
};
pub use damage::{
    ailment_for_damage_type, can_convert_damage_type, damage_type_by_name, DamageType,
    DAMAGE_TYPES,
};
pub use forms::{damage_form_by_name, modifier_applies, DamageForm, DAMAGE_FORMS};
pub use keywords::{extract_level_mechanics, is_severe_penalty, KeywordRule, Match};
pub use mechanics::{
    is_combo_skill, is_spell_burst_compatible, SkillMechanic, COMBO, SKILL_MECHANICS, SPELL_BURST,
};
pub use stats::{
    preferred_damage_types, primary_stat_for_god_type, stat_affinity, GodTypeDamage, PrimaryStat,
    StatAffinity, GOD_TYPE_DAMAGE_OVERRIDES, STAT_AFFINITIES,
};
pub use tags::{
    recommended_stats_for_tags, skill_speed_for_tags, tag_synergy, SkillSpeed, TagSynergy,
    SKILL_TAG_SYNERGIES,
};
pub use talents::{talent_mechanics, TalentMechanics, BURST_CORE_MECHANIC, TALENT_MECHANICS};
