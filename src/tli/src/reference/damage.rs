//! Damage type definitions

/// Damage type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageType {
    pub name: &'static str,
    /// Status ailment inflicted by this damage type
    pub ailment: &'static str,
    pub bypasses_resistance: bool,
    /// Position in the conversion chain. Damage converts only upwards.
    pub conversion_priority: u8,
    pub description: &'static str,
}

/// All damage types, in conversion order
pub const DAMAGE_TYPES: &[DamageType] = &[
    DamageType {
        name: "Physical",
        ailment: "Trauma",
        bypasses_resistance: true,
        conversion_priority: 1,
        description: "Ignores elemental resistance",
    },
    DamageType {
        name: "Lightning",
        ailment: "Shock",
        bypasses_resistance: false,
        conversion_priority: 2,
        description: "Inflicts Shock",
    },
    DamageType {
        name: "Cold",
        ailment: "Frostbite/Freeze",
        bypasses_resistance: false,
        conversion_priority: 3,
        description: "Slows and freezes, crowd control",
    },
    DamageType {
        name: "Fire",
        ailment: "Ignite",
        bypasses_resistance: false,
        conversion_priority: 4,
        description: "Inflicts Ignite, damage over time focused",
    },
    DamageType {
        name: "Erosion",
        ailment: "Wilt",
        bypasses_resistance: false,
        conversion_priority: 5,
        description: "Inflicts Wilt, cannot be converted further",
    },
];

/// Get damage type by name (case-insensitive)
pub fn damage_type_by_name(name: &str) -> Option<&'static DamageType> {
    DAMAGE_TYPES
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Get the ailment associated with a damage type
pub fn ailment_for_damage_type(name: &str) -> Option<&'static str> {
    damage_type_by_name(name).map(|d| d.ailment)
}

/// Whether hit damage of one type can be converted into another.
///
/// Conversion only runs from a lower to a higher priority, so
/// Physical -> Fire is allowed and Fire -> Physical is not.
pub fn can_convert_damage_type(from: &str, to: &str) -> bool {
    match (damage_type_by_name(from), damage_type_by_name(to)) {
        (Some(f), Some(t)) => f.conversion_priority < t.conversion_priority,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_lookup() {
        assert_eq!(ailment_for_damage_type("Fire"), Some("Ignite"));
        assert_eq!(ailment_for_damage_type("physical"), Some("Trauma"));
        assert_eq!(ailment_for_damage_type("Erosion"), Some("Wilt"));
        assert_eq!(ailment_for_damage_type("Holy"), None);
    }

    #[test]
    fn test_conversion_is_one_way() {
        assert!(can_convert_damage_type("Physical", "Fire"));
        assert!(can_convert_damage_type("Lightning", "Erosion"));
        assert!(!can_convert_damage_type("Fire", "Physical"));
        assert!(!can_convert_damage_type("Fire", "Fire"));
        assert!(!can_convert_damage_type("Fire", "Holy"));
    }

    #[test]
    fn test_only_physical_bypasses_resistance() {
        let bypassing: Vec<_> = DAMAGE_TYPES
            .iter()
            .filter(|d| d.bypasses_resistance)
            .map(|d| d.name)
            .collect();
        assert_eq!(bypassing, vec!["Physical"]);
    }
}
