//! Reference data command CLI definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReferenceCommand {
    /// List damage types with their ailments and conversion order
    #[command(visible_alias = "dt")]
    DamageTypes,

    /// List talents that have a mechanics profile
    Talents,

    /// Show the mechanics profile of one talent
    Talent {
        /// Talent name (e.g. "Anger")
        name: String,
    },

    /// List skill tag synergies
    Tags,
}
