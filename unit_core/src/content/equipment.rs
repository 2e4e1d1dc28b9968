//! Equipment - Immutable items that occupy an equipment slot

use crate::types::{EquipmentType, Stat, StatLine};
use serde::{Deserialize, Serialize};

/// An equippable item with fixed stat deltas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    /// Flat per-stat deltas applied while equipped
    #[serde(default)]
    pub modifiers: StatLine,
    #[serde(default)]
    pub type_tags: Vec<String>,
    /// Weapon reach (weapons only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_range: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<u32>,
}

impl Equipment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, equipment_type: EquipmentType) -> Self {
        Equipment {
            id: id.into(),
            name: name.into(),
            equipment_type,
            modifiers: StatLine::default(),
            type_tags: Vec::new(),
            min_range: None,
            max_range: None,
        }
    }

    /// Add a stat delta
    pub fn with_modifier(mut self, stat: Stat, value: i32) -> Self {
        self.modifiers.set(stat, value);
        self
    }

    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min_range = Some(min);
        self.max_range = Some(max);
        self
    }

    pub fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tags.push(tag.into());
        self
    }

    /// Delta this item contributes to a stat
    pub fn modifier(&self, stat: Stat) -> i32 {
        self.modifiers.get(stat)
    }

    pub fn is_weapon(&self) -> bool {
        self.equipment_type.is_weapon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_modifiers_default_to_zero() {
        let sword = Equipment::new("bronze_sword", "Bronze Sword", EquipmentType::OneHanded)
            .with_modifier(Stat::PhysicalPower, 4)
            .with_range(1, 1);

        assert_eq!(sword.modifier(Stat::PhysicalPower), 4);
        assert_eq!(sword.modifier(Stat::MagicPower), 0);
        assert!(sword.is_weapon());
        assert_eq!(sword.max_range, Some(1));
    }

    #[test]
    fn test_equipment_from_toml() {
        let toml = r#"
id = "leather_cap"
name = "Leather Cap"
type = "head"
type_tags = ["light"]

[modifiers]
max_health = 8
physical_evade = 2
"#;
        let cap: Equipment = toml::from_str(toml).unwrap();
        assert_eq!(cap.equipment_type, EquipmentType::Head);
        assert_eq!(cap.modifier(Stat::MaxHealth), 8);
        assert_eq!(cap.modifier(Stat::PhysicalEvade), 2);
        assert!(!cap.is_weapon());
        assert!(cap.min_range.is_none());
    }
}
