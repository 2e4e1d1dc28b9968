//! Content pack loading

use super::{ConfigError, UnitRules};
use crate::content::{CombatAbility, ContentError, ContentRepository, Equipment, UnitClass};
use crate::types::{Stat, StatLine};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{info, warn};

/// A content pack as written in TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub rules: UnitRules,
    #[serde(default)]
    pub abilities: Vec<CombatAbility>,
    #[serde(default)]
    pub classes: Vec<ClassConfig>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// A class definition referencing abilities by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub learnable_abilities: Vec<String>,
    #[serde(default)]
    pub base_stat_grants: StatLine,
    /// Stat name -> factor
    #[serde(default)]
    pub stat_multipliers: BTreeMap<String, f64>,
    #[serde(default)]
    pub requirements: BTreeMap<String, u32>,
}

impl ClassConfig {
    /// Resolve ability ids against the repository and build the class
    fn build(self, repo: &ContentRepository) -> Result<UnitClass, ConfigError> {
        let mut class = UnitClass::new(self.id, self.name).with_description(self.description);
        class.tags = self.tags;
        class.requirements = self.requirements;

        for ability_id in self.learnable_abilities {
            let ability = repo.get_ability_by_id(&ability_id).ok_or_else(|| {
                ContentError::UnknownAbility {
                    class: class.id.clone(),
                    ability: ability_id.clone(),
                }
            })?;
            class.learnable_abilities.push(ability);
        }

        for (stat, grant) in self.base_stat_grants.non_zero() {
            class.base_stat_grants.insert(stat, grant);
        }

        for (name, factor) in self.stat_multipliers {
            let stat: Stat = name.parse().map_err(|e| {
                ConfigError::ValidationError(format!("class '{}': {}", class.id, e))
            })?;
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "class '{}': multiplier for {} must be a non-negative number",
                    class.id, name
                )));
            }
            class.stat_multipliers.insert(stat, factor);
        }

        Ok(class)
    }
}

/// Build a repository from a parsed content pack
///
/// Abilities and equipment are registered first so classes can reference
/// abilities by id.
pub fn build_repository(config: ContentConfig) -> Result<ContentRepository, ConfigError> {
    let mut repo = ContentRepository::new().with_rules(config.rules);

    for ability in config.abilities {
        repo.register_ability(ability);
    }
    for equipment in config.equipment {
        repo.register_equipment(equipment);
    }

    let class_ids: BTreeSet<String> = config.classes.iter().map(|c| c.id.clone()).collect();
    for class_config in config.classes {
        for prerequisite in class_config.requirements.keys() {
            if !class_ids.contains(prerequisite) {
                warn!(
                    "Class '{}' requires unknown class '{}'",
                    class_config.id, prerequisite
                );
            }
        }
        let class = class_config.build(&repo)?;
        repo.register_class(class)?;
    }

    info!(
        "Loaded {} classes, {} abilities, {} equipment",
        repo.class_count(),
        repo.ability_count(),
        repo.equipment_count()
    );
    Ok(repo)
}

/// Load a content pack from a TOML file
pub fn load_content(path: &Path) -> Result<ContentRepository, ConfigError> {
    let config: ContentConfig = super::load_toml(path)?;
    build_repository(config)
}

/// Load a content pack from a TOML string
pub fn parse_content(content: &str) -> Result<ContentRepository, ConfigError> {
    let config: ContentConfig = super::parse_toml(content)?;
    build_repository(config)
}

/// Load the bundled content pack
pub fn default_content() -> Result<ContentRepository, ConfigError> {
    let toml = include_str!("../../config/content.toml");
    parse_content(toml)
}
