//! UnitClass - Archetypes that grant stats and gate abilities

use crate::content::CombatAbility;
use crate::types::Stat;
use crate::unit::ExperienceLedger;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// A unit class (job)
///
/// Holds flat base-stat grants, per-stat multipliers, the ordered list of
/// abilities learnable through this class, and the experience required in
/// other classes before this one unlocks.
#[derive(Debug, Clone)]
pub struct UnitClass {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    pub learnable_abilities: Vec<Arc<CombatAbility>>,
    /// Flat additions to base stats; absent stats grant 0
    pub base_stat_grants: BTreeMap<Stat, i32>,
    /// Multiplicative factors; absent stats use 1.0
    pub stat_multipliers: BTreeMap<Stat, f64>,
    /// Prerequisite class id -> experience required in that class
    pub requirements: BTreeMap<String, u32>,
}

impl UnitClass {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        UnitClass {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            tags: BTreeSet::new(),
            learnable_abilities: Vec::new(),
            base_stat_grants: BTreeMap::new(),
            stat_multipliers: BTreeMap::new(),
            requirements: BTreeMap::new(),
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

    pub fn with_ability(mut self, ability: Arc<CombatAbility>) -> Self {
        self.learnable_abilities.push(ability);
        self
    }

    pub fn with_grant(mut self, stat: Stat, value: i32) -> Self {
        self.base_stat_grants.insert(stat, value);
        self
    }

    pub fn with_multiplier(mut self, stat: Stat, factor: f64) -> Self {
        self.stat_multipliers.insert(stat, factor);
        self
    }

    pub fn with_requirement(mut self, class_id: impl Into<String>, experience: u32) -> Self {
        self.requirements.insert(class_id.into(), experience);
        self
    }

    /// Multiplier for a stat, 1.0 when undeclared
    pub fn multiplier(&self, stat: Stat) -> f64 {
        self.stat_multipliers.get(&stat).copied().unwrap_or(1.0)
    }

    /// Flat base grant for a stat, 0 when undeclared
    pub fn base_grant(&self, stat: Stat) -> i32 {
        self.base_stat_grants.get(&stat).copied().unwrap_or(0)
    }

    /// Whether the ability is on this class's learnable list
    pub fn can_learn(&self, ability: &CombatAbility) -> bool {
        self.learnable_abilities.iter().any(|a| a.id == ability.id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Check unlock requirements against a unit's earned class experience
    pub fn requirements_met(&self, ledger: &ExperienceLedger) -> bool {
        self.requirements
            .iter()
            .all(|(class_id, required)| ledger.class_experience(class_id) >= *required)
    }
}
