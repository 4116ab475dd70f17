//! Status ailment definitions

/// How an ailment deals (or doesn't deal) its damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AilmentForm {
    /// Damage over time
    DoT,
    /// Secondary damage triggered by hits
    Secondary,
    /// No damage, increases damage taken
    Debuff,
    /// Crowd control
    Control,
}

/// Ailment information
#[derive(Debug, Clone, PartialEq)]
pub struct Ailment {
    pub name: &'static str,
    pub damage_type: &'static str,
    pub form: AilmentForm,
    pub duration_secs: f64,
    /// Maximum concurrent stacks. `None` means unbounded.
    pub max_stacks: Option<u32>,
    pub scaling_stats: &'static [&'static str],
    pub description: &'static str,
}

/// All ailments
pub const AILMENTS: &[Ailment] = &[
    Ailment {
        name: "Ignite",
        damage_type: "Fire",
        form: AilmentForm::DoT,
        duration_secs: 4.0,
        max_stacks: Some(1),
        scaling_stats: &[
            "Fire Damage",
            "Damage Over Time",
            "Affliction",
            "Ignite Damage",
            "Base Ignite Damage",
        ],
        description: "Fire damage every second for 4 seconds",
    },
    Ailment {
        name: "Shock",
        damage_type: "Lightning",
        form: AilmentForm::Secondary,
        duration_secs: 4.0,
        max_stacks: Some(1),
        scaling_stats: &["Lightning Damage", "Shock Damage", "Hit Frequency"],
        description: "Secondary lightning damage on each hit, ignores resistance, up to 12 triggers",
    },
    Ailment {
        name: "Trauma",
        damage_type: "Physical",
        form: AilmentForm::DoT,
        duration_secs: 4.0,
        max_stacks: Some(1),
        scaling_stats: &[
            "Physical Damage",
            "Damage Over Time",
            "Reaping",
            "Trauma Damage",
            "Base Trauma Damage",
        ],
        description: "Physical damage every second for 4 seconds, highest instance applies",
    },
    Ailment {
        name: "Wilt",
        damage_type: "Erosion",
        form: AilmentForm::DoT,
        duration_secs: 1.0,
        max_stacks: None,
        scaling_stats: &[
            "Erosion Damage",
            "Damage Over Time",
            "Wilt Damage",
            "Base Wilt Damage",
            "Wilt Stack Count",
        ],
        description: "Erosion damage every second, stacks without limit",
    },
    Ailment {
        name: "Numbed",
        damage_type: "Lightning",
        form: AilmentForm::Debuff,
        duration_secs: 2.0,
        max_stacks: Some(10),
        scaling_stats: &[
            "Lightning Damage",
            "Numbed Chance",
            "Numbed Duration",
            "Numbed Effect",
        ],
        description: "+5% damage taken per stack, up to 10 stacks",
    },
    Ailment {
        name: "Frostbite/Freeze",
        damage_type: "Cold",
        form: AilmentForm::Control,
        duration_secs: 4.0,
        max_stacks: Some(1),
        scaling_stats: &[
            "Cold Damage",
            "Freeze Chance",
            "Freeze Duration",
            "Ailment Chance",
        ],
        description: "Slows, then immobilizes normal monsters",
    },
];

/// Get ailment by name (case-insensitive)
pub fn ailment_by_name(name: &str) -> Option<&'static Ailment> {
    AILMENTS.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}

/// Whether the ailment deals damage over time
pub fn is_dot_ailment(name: &str) -> bool {
    ailment_by_name(name).is_some_and(|a| a.form == AilmentForm::DoT)
}

/// Whether the ailment rewards stacking it (unbounded or multi-stack)
pub fn scales_by_stacking(name: &str) -> bool {
    ailment_by_name(name).is_some_and(|a| a.max_stacks.map_or(true, |n| n > 1))
}
