//! CombatAbility - Learnable abilities

use crate::types::AbilityCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ability a unit can learn by spending class experience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatAbility {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: AbilityCategory,
    /// Class experience required to learn this ability
    pub experience_price: u32,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl CombatAbility {
    /// Create a new ability with no description or tags
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: AbilityCategory,
        experience_price: u32,
    ) -> Self {
        CombatAbility {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            experience_price,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_builder() {
        let ability = CombatAbility::new("counter", "Counter", AbilityCategory::Reaction, 20)
            .with_description("Strike back when hit")
            .with_tag("melee")
            .with_tag("melee");

        assert_eq!(ability.experience_price, 20);
        assert_eq!(ability.tags.len(), 1);
        assert!(ability.has_tag("melee"));
        assert!(!ability.has_tag("magic"));
    }

    #[test]
    fn test_ability_from_toml() {
        let toml = r#"
id = "dash"
name = "Dash"
category = "movement"
experience_price = 35
"#;
        let ability: CombatAbility = toml::from_str(toml).unwrap();
        assert_eq!(ability.category, AbilityCategory::Movement);
        assert!(ability.description.is_empty());
        assert!(ability.tags.is_empty());
    }
}
