//! Save/load codec for units
//!
//! Units are written as a flat record that names classes, abilities and
//! equipment by id. Restoring never aborts on a dangling reference except the
//! primary class; everything else is dropped and reported.

mod record;

pub use record::UnitRecord;

use crate::content::ContentRepository;
use crate::types::{AbilitySlot, EquipmentSlot};
use crate::unit::HumanoidUnit;
use std::fmt;
use thiserror::Error;

/// Fatal restore error
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("Unknown primary class: {0}")]
    UnknownPrimaryClass(String),
    #[error("Malformed unit record: {0}")]
    Json(#[from] serde_json::Error),
}

/// A reference that could not be resolved and was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreWarning {
    SecondaryClass(String),
    LearnedAbility(String),
    AssignedAbility { slot: AbilitySlot, id: String },
    Equipment { slot: EquipmentSlot, id: String },
}

impl fmt::Display for RestoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreWarning::SecondaryClass(id) => write!(f, "unknown secondary class '{}'", id),
            RestoreWarning::LearnedAbility(id) => write!(f, "unknown learned ability '{}'", id),
            RestoreWarning::AssignedAbility { slot, id } => {
                write!(f, "unknown {:?} ability '{}'", slot, id)
            }
            RestoreWarning::Equipment { slot, id } => {
                write!(f, "unknown equipment '{}' in {:?} slot", id, slot)
            }
        }
    }
}

/// A restored unit plus every reference that was dropped on the way
#[derive(Debug, Clone)]
pub struct Restored<T> {
    pub unit: T,
    pub warnings: Vec<RestoreWarning>,
}

impl<T> Restored<T> {
    /// True when every reference resolved
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_unit(self) -> T {
        self.unit
    }
}

impl HumanoidUnit {
    /// Serialize to the JSON save format
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_record())
    }

    /// Parse the JSON save format and restore the unit
    pub fn from_json(
        json: &str,
        repo: &ContentRepository,
    ) -> Result<Restored<HumanoidUnit>, RestoreError> {
        let record: UnitRecord = serde_json::from_str(json)?;
        HumanoidUnit::from_record(record, repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CombatAbility, Equipment, UnitClass};
    use crate::source::StatModifier;
    use crate::types::{AbilityCategory, EquipmentType, Stat, StatLine};
    use crate::unit::CombatUnit;
    use std::sync::Arc;

    fn repo() -> ContentRepository {
        let mut repo = ContentRepository::new();
        let counter = repo.register_ability(CombatAbility::new(
            "counter",
            "Counter",
            AbilityCategory::Reaction,
            20,
        ));
        let dash = repo.register_ability(CombatAbility::new("dash", "Dash", AbilityCategory::Movement, 30));
        let fire = repo.register_ability(CombatAbility::new("fire", "Fire", AbilityCategory::Action, 40));
        repo.register_class(
            UnitClass::new("squire", "Squire")
                .with_ability(counter)
                .with_ability(dash)
                .with_multiplier(Stat::PhysicalPower, 1.2),
        )
        .unwrap();
        repo.register_class(
            UnitClass::new("mage", "Mage")
                .with_ability(fire)
                .with_requirement("squire", 50),
        )
        .unwrap();
        repo.register_equipment(
            Equipment::new("sword", "Sword", EquipmentType::OneHanded)
                .with_modifier(Stat::PhysicalPower, 5),
        );
        repo.register_equipment(
            Equipment::new("cap", "Cap", EquipmentType::Head).with_modifier(Stat::MaxHealth, 8),
        );
        repo
    }

    fn sample_unit(repo: &ContentRepository) -> HumanoidUnit {
        let squire = repo.get_class_by_id("squire").unwrap();
        let mage = repo.get_class_by_id("mage").unwrap();
        let counter = repo.get_ability_by_id("counter").unwrap();
        let dash = repo.get_ability_by_id("dash").unwrap();

        let mut unit = HumanoidUnit::new("Ramza", Arc::clone(&squire))
            .with_base_stats(
                StatLine::default()
                    .with(Stat::MaxHealth, 45)
                    .with(Stat::PhysicalPower, 9)
                    .with(Stat::Speed, 6),
            )
            .with_sprite("ramza_01")
            .player_controlled();
        unit.add_experience(120, Some(squire.as_ref()));
        unit.add_experience(35, Some(mage.as_ref()));
        unit.add_experience(10, None);
        assert!(unit.learn_ability(&counter, &squire));
        assert!(unit.learn_ability(&dash, &squire));
        unit.assign_reaction_ability(&counter);
        unit.assign_movement_ability(&dash);
        unit.set_secondary_class(Some(mage));
        unit.equip_right_hand(repo.get_equipment_by_id("sword").unwrap()).unwrap();
        unit.equip_head(repo.get_equipment_by_id("cap").unwrap()).unwrap();
        unit.take_damage(7);
        unit.spend_mana(2);
        unit.advance_turn_gauge(40);
        unit
    }

    #[test]
    fn test_round_trip() {
        let repo = repo();
        let unit = sample_unit(&repo);
        let json = unit.to_json().unwrap();
        let restored = HumanoidUnit::from_json(&json, &repo).unwrap();
        assert!(restored.is_clean());
        let copy = restored.into_unit();

        assert_eq!(copy.name(), "Ramza");
        assert_eq!(copy.sprite_id(), "ramza_01");
        assert!(copy.is_player_controlled());
        assert_eq!(copy.effective_stats(), unit.effective_stats());
        assert_eq!(copy.total_experience(), 165);
        assert_eq!(copy.experience_ledger(), unit.experience_ledger());
        assert_eq!(copy.secondary_class().unwrap().id, "mage");
        assert_eq!(copy.learned_abilities().len(), 2);
        assert_eq!(copy.reaction_ability().unwrap().id, "counter");
        assert_eq!(copy.movement_ability().unwrap().id, "dash");
        assert!(copy.passive_ability().is_none());
        assert_eq!(copy.right_hand().unwrap().id, "sword");
        assert_eq!(copy.head().unwrap().id, "cap");
        assert!(copy.left_hand().is_none());
        assert_eq!(copy.wounds(), 7);
        assert_eq!(copy.mana_used(), 2);
        assert_eq!(copy.turn_gauge(), 40);
        assert_eq!(copy.to_record(), unit.to_record());
    }

    #[test]
    fn test_record_field_names() {
        let repo = repo();
        let value = serde_json::to_value(sample_unit(&repo).to_record()).unwrap();
        assert_eq!(value["unit_class_id"], "squire");
        assert_eq!(value["secondary_class_id"], "mage");
        assert_eq!(value["left_hand_id"], serde_json::Value::Null);
        assert_eq!(value["class_experience"]["squire"], 120);
        assert_eq!(value["class_experience_spent"]["squire"], 50);
        assert_eq!(value["learned_ability_ids"][0], "counter");
    }

    #[test]
    fn test_modifiers_are_not_saved() {
        let repo = repo();
        let mut unit = sample_unit(&repo);
        unit.apply_modifier(StatModifier::timed("haste", Stat::Speed, 2, 3, "haste", "Haste"));
        let copy = HumanoidUnit::from_record(unit.to_record(), &repo).unwrap().into_unit();
        assert!(copy.modifiers().is_empty());
    }

    #[test]
    fn test_unknown_primary_class_fails() {
        let repo = repo();
        let mut record = sample_unit(&repo).to_record();
        record.unit_class_id = "dragoon".to_string();
        let err = HumanoidUnit::from_record(record, &repo).unwrap_err();
        assert!(matches!(err, RestoreError::UnknownPrimaryClass(id) if id == "dragoon"));
    }

    #[test]
    fn test_dangling_references_are_dropped() {
        let repo = repo();
        let mut record = sample_unit(&repo).to_record();
        record.learned_ability_ids.push("bogus".to_string());
        record.secondary_class_id = Some("bogus_class".to_string());
        record.right_hand_id = Some("bogus_sword".to_string());
        record.passive_ability_id = Some("bogus_passive".to_string());

        let restored = HumanoidUnit::from_record(record, &repo).unwrap();
        assert_eq!(
            restored.warnings,
            vec![
                RestoreWarning::SecondaryClass("bogus_class".to_string()),
                RestoreWarning::LearnedAbility("bogus".to_string()),
                RestoreWarning::AssignedAbility {
                    slot: AbilitySlot::Passive,
                    id: "bogus_passive".to_string()
                },
                RestoreWarning::Equipment {
                    slot: EquipmentSlot::RightHand,
                    id: "bogus_sword".to_string()
                },
            ]
        );

        let unit = restored.unit;
        assert!(unit.secondary_class().is_none());
        assert!(unit.right_hand().is_none());
        assert!(unit.passive_ability().is_none());
        assert_eq!(unit.head().unwrap().id, "cap");
        assert_eq!(unit.learned_abilities().len(), 2);
        assert_eq!(unit.reaction_ability().unwrap().id, "counter");
    }

    #[test]
    fn test_malformed_json() {
        let repo = repo();
        let err = HumanoidUnit::from_json("{\"name\": 3}", &repo).unwrap_err();
        assert!(matches!(err, RestoreError::Json(_)));
    }

    #[test]
    fn test_minimal_record_uses_defaults() {
        let repo = repo();
        let json = r#"{"name": "Agrias", "unit_class_id": "squire"}"#;
        let unit = HumanoidUnit::from_json(json, &repo).unwrap().into_unit();
        assert_eq!(unit.name(), "Agrias");
        assert_eq!(unit.total_experience(), 0);
        assert!(unit.learned_abilities().is_empty());
        assert_eq!(unit.all_equipped().count(), 0);
    }

    #[test]
    fn test_round_trip_keeps_unit_rules() {
        let mut repo = repo().with_rules(crate::config::UnitRules::strict());
        repo.register_class(UnitClass::new("mage", "Mage").with_multiplier(Stat::MagicPower, 2.0))
            .unwrap();
        let mut unit = sample_unit(&repo);
        unit.set_base_stat(Stat::MagicPower, 10);
        assert_eq!(unit.secondary_class().unwrap().multiplier(Stat::MagicPower), 2.0);

        let copy = HumanoidUnit::from_json(&unit.to_json().unwrap(), &repo)
            .unwrap()
            .into_unit();
        assert_eq!(copy.rules(), crate::config::UnitRules::default());
        assert_eq!(copy.effective_stat(Stat::MagicPower), 10);
        assert_eq!(copy.effective_stats(), unit.effective_stats());
    }

    #[test]
    fn test_record_without_rules_uses_repository_rules() {
        let repo = repo().with_rules(crate::config::UnitRules::strict());
        let json = r#"{"name": "Agrias", "unit_class_id": "squire"}"#;
        let unit = HumanoidUnit::from_json(json, &repo).unwrap().into_unit();
        assert!(unit.rules().enforce_slot_category);
        assert!(unit.rules().blend_secondary_class);
    }

    #[test]
    fn test_paying_class_survives_round_trip() {
        let repo = repo();
        let unit = sample_unit(&repo);
        let squire = repo.get_class_by_id("squire").unwrap();
        let counter = repo.get_ability_by_id("counter").unwrap();

        let mut record = unit.to_record();
        assert_eq!(record.learned_via["counter"], "squire");
        record.learned_via.insert("bogus".to_string(), "squire".to_string());

        let mut copy = HumanoidUnit::from_record(record, &repo).unwrap().into_unit();
        assert_eq!(copy.learned_via(&counter), Some("squire"));
        assert_eq!(copy.to_record().learned_via.len(), 2);
        assert!(copy.forget_ability(&counter, &squire));
    }

    #[test]
    fn test_pretty_json_restores() {
        let repo = repo();
        let unit = sample_unit(&repo);
        let pretty = unit.to_json_pretty().unwrap();
        assert!(pretty.contains("\n  \"name\": \"Ramza\""));
        let copy = HumanoidUnit::from_json(&pretty, &repo).unwrap().into_unit();
        assert_eq!(copy.to_record(), unit.to_record());
    }

    #[test]
    fn test_extreme_base_stats_do_not_overflow() {
        let mut repo = ContentRepository::new();
        repo.register_class(
            UnitClass::new("squire", "Squire")
                .with_grant(Stat::MaxHealth, 5)
                .with_grant(Stat::Speed, -5),
        )
        .unwrap();
        let json = r#"{"name": "X", "unit_class_id": "squire",
            "base_stats": {"max_health": 2147483647, "speed": -2147483648}}"#;

        let mut unit = HumanoidUnit::from_json(json, &repo).unwrap().into_unit();
        unit.apply_modifier(StatModifier::permanent("vow", Stat::MaxHealth, 9, "vow", "Vow"));
        assert_eq!(unit.max_health(), i32::MAX);
        assert_eq!(unit.effective_stat(Stat::Speed), i32::MIN);
        unit.take_damage(u32::MAX);
        assert_eq!(unit.health(), 0);
    }
}
