//! Damage form definitions (hit, damage over time, secondary)

/// Damage form information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageForm {
    pub name: &'static str,
    pub description: &'static str,
    /// Modifiers that apply to this form
    pub affected_by: &'static [&'static str],
    /// Modifiers that have no effect on this form
    pub not_affected_by: &'static [&'static str],
    pub recommended_stats: &'static [&'static str],
}

/// All damage forms that carry build advice
pub const DAMAGE_FORMS: &[DamageForm] = &[
    DamageForm {
        name: "Hit",
        description: "Direct attack or spell damage",
        affected_by: &[
            "Critical Strike",
            "Double Damage",
            "Accuracy/Evasion",
            "Armor",
            "Block",
            "Damage Type Conversion",
        ],
        not_affected_by: &[],
        recommended_stats: &[
            "Critical Strike Chance",
            "Critical Damage",
            "Accuracy",
            "Armor Penetration",
            "Double Damage Chance",
        ],
    },
    DamageForm {
        name: "DoT",
        description: "Damage over time",
        affected_by: &["Affliction", "Reaping", "Damage Type Conversion"],
        not_affected_by: &[
            "Critical Strike",
            "Double Damage",
            "Accuracy",
            "Armor",
            "Block",
        ],
        recommended_stats: &[
            "Affliction",
            "Reaping",
            "DoT Multiplier",
            "Duration",
            "Ailment Chance",
        ],
    },
    DamageForm {
        name: "Secondary",
        description: "Incidental damage such as explosions",
        affected_by: &["Armor", "Avoidance", "Damage Type Conversion"],
        not_affected_by: &["Critical Strike", "Accuracy", "Block"],
        recommended_stats: &["Secondary Damage Boost", "Area Damage"],
    },
];

/// Get damage form by name
pub fn damage_form_by_name(name: &str) -> Option<&'static DamageForm> {
    DAMAGE_FORMS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Whether a modifier has any effect on the given damage form
pub fn modifier_applies(form: &str, modifier: &str) -> bool {
    damage_form_by_name(form).is_some_and(|f| {
        !f.not_affected_by
            .iter()
            .any(|m| m.eq_ignore_ascii_case(modifier))
    })
}
