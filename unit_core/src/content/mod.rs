//! Content definitions and the repository that owns them
//!
//! Classes, abilities and equipment are created once at content-load time and
//! are read-only afterwards. They are shared through `Arc` so units can hold
//! them directly. A fresh `ContentRepository` replaces any notion of clearing
//! global state.

mod ability;
mod class;
mod equipment;

pub use ability::CombatAbility;
pub use class::UnitClass;
pub use equipment::Equipment;

use crate::config::UnitRules;
use crate::unit::ExperienceLedger;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Content registration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Class '{0}' lists itself as a requirement")]
    SelfRequirement(String),
    #[error("Class '{class}' references unknown ability '{ability}'")]
    UnknownAbility { class: String, ability: String },
}

/// Anything stored in a registry
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for CombatAbility {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for UnitClass {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Id-keyed lookup table that remembers registration order
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: HashMap<String, Arc<T>>,
    order: Vec<String>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Identified> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry, replacing any previous entry with the same id
    pub fn register(&mut self, item: T) -> Arc<T> {
        let id = item.id().to_string();
        let item = Arc::new(item);
        if self.entries.insert(id.clone(), Arc::clone(&item)).is_none() {
            self.order.push(id);
        }
        item
    }

    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All entries in registration order
    pub fn all(&self) -> impl Iterator<Item = &Arc<T>> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All loaded content plus the rules units are built with
#[derive(Debug, Clone, Default)]
pub struct ContentRepository {
    classes: Registry<UnitClass>,
    abilities: Registry<CombatAbility>,
    equipment: Registry<Equipment>,
    rules: UnitRules,
}

impl ContentRepository {
    /// Create an empty repository with default rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: UnitRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> UnitRules {
        self.rules
    }

    // === Classes ===

    /// Register a class; a class may not require experience in itself
    pub fn register_class(&mut self, class: UnitClass) -> Result<Arc<UnitClass>, ContentError> {
        if class.requirements.contains_key(&class.id) {
            return Err(ContentError::SelfRequirement(class.id));
        }
        Ok(self.classes.register(class))
    }

    pub fn get_class_by_id(&self, id: &str) -> Option<Arc<UnitClass>> {
        self.classes.get(id)
    }

    pub fn all_classes(&self) -> impl Iterator<Item = &Arc<UnitClass>> {
        self.classes.all()
    }

    /// Classes whose unlock requirements the ledger satisfies
    pub fn unlocked_classes<'a>(
        &'a self,
        ledger: &'a ExperienceLedger,
    ) -> impl Iterator<Item = &'a Arc<UnitClass>> + 'a {
        self.classes.all().filter(move |class| class.requirements_met(ledger))
    }

    // === Abilities ===

    pub fn register_ability(&mut self, ability: CombatAbility) -> Arc<CombatAbility> {
        self.abilities.register(ability)
    }

    pub fn get_ability_by_id(&self, id: &str) -> Option<Arc<CombatAbility>> {
        self.abilities.get(id)
    }

    pub fn all_abilities(&self) -> impl Iterator<Item = &Arc<CombatAbility>> {
        self.abilities.all()
    }

    // === Equipment ===

    pub fn register_equipment(&mut self, equipment: Equipment) -> Arc<Equipment> {
        self.equipment.register(equipment)
    }

    pub fn get_equipment_by_id(&self, id: &str) -> Option<Arc<Equipment>> {
        self.equipment.get(id)
    }

    pub fn all_equipment(&self) -> impl Iterator<Item = &Arc<Equipment>> {
        self.equipment.all()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn ability_count(&self) -> usize {
        self.abilities.len()
    }

    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }
}
