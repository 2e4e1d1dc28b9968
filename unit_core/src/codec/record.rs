//! UnitRecord - The flat save format for humanoid units

use super::{RestoreError, RestoreWarning, Restored};
use crate::config::UnitRules;
use crate::content::ContentRepository;
use crate::types::{AbilitySlot, EquipmentSlot, StatLine};
use crate::unit::{ExperienceLedger, HumanoidUnit, UnitCore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A humanoid unit with every content reference replaced by its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    // === Identity ===
    pub name: String,
    #[serde(default)]
    pub sprite_id: String,
    #[serde(default)]
    pub is_player_controlled: bool,
    #[serde(default)]
    pub base_stats: StatLine,
    pub unit_class_id: String,
    #[serde(default)]
    pub secondary_class_id: Option<String>,
    /// Absent in older saves; the repository's rules apply then
    #[serde(default)]
    pub rules: Option<UnitRules>,

    // === Abilities ===
    #[serde(default)]
    pub learned_ability_ids: Vec<String>,
    #[serde(default)]
    pub reaction_ability_id: Option<String>,
    #[serde(default)]
    pub movement_ability_id: Option<String>,
    #[serde(default)]
    pub passive_ability_id: Option<String>,
    /// Learned ability id -> id of the class that paid for it
    #[serde(default)]
    pub learned_via: BTreeMap<String, String>,

    // === Equipment ===
    #[serde(default)]
    pub left_hand_id: Option<String>,
    #[serde(default)]
    pub right_hand_id: Option<String>,
    #[serde(default)]
    pub head_id: Option<String>,
    #[serde(default)]
    pub body_id: Option<String>,
    #[serde(default)]
    pub accessory_id: Option<String>,

    // === Experience ===
    #[serde(default)]
    pub total_experience: u32,
    #[serde(default)]
    pub class_experience: BTreeMap<String, u32>,
    #[serde(default)]
    pub class_experience_spent: BTreeMap<String, u32>,

    // === Combat counters ===
    #[serde(default)]
    pub wounds: u32,
    #[serde(default)]
    pub mana_used: u32,
    #[serde(default)]
    pub turn_gauge: u32,
}

impl UnitRecord {
    fn slot_id(&self, slot: EquipmentSlot) -> Option<&String> {
        match slot {
            EquipmentSlot::LeftHand => self.left_hand_id.as_ref(),
            EquipmentSlot::RightHand => self.right_hand_id.as_ref(),
            EquipmentSlot::Head => self.head_id.as_ref(),
            EquipmentSlot::Body => self.body_id.as_ref(),
            EquipmentSlot::Accessory => self.accessory_id.as_ref(),
        }
    }

    fn ability_slot_id(&self, slot: AbilitySlot) -> Option<&String> {
        match slot {
            AbilitySlot::Reaction => self.reaction_ability_id.as_ref(),
            AbilitySlot::Movement => self.movement_ability_id.as_ref(),
            AbilitySlot::Passive => self.passive_ability_id.as_ref(),
        }
    }
}

impl HumanoidUnit {
    /// Flatten the unit into its save record
    pub fn to_record(&self) -> UnitRecord {
        let core = &self.core;
        let id_of = |slot: EquipmentSlot| self.equipment.get(slot).map(|e| e.id.clone());
        let ability_id = |slot: AbilitySlot| core.slot(slot).as_ref().map(|a| a.id.clone());

        UnitRecord {
            name: core.name.clone(),
            sprite_id: core.sprite_id.clone(),
            is_player_controlled: core.is_player_controlled,
            base_stats: core.base_stats,
            unit_class_id: core.unit_class.id.clone(),
            secondary_class_id: core.secondary_class.as_ref().map(|c| c.id.clone()),
            rules: Some(core.rules),

            learned_ability_ids: core.learned_abilities.iter().map(|a| a.id.clone()).collect(),
            reaction_ability_id: ability_id(AbilitySlot::Reaction),
            movement_ability_id: ability_id(AbilitySlot::Movement),
            passive_ability_id: ability_id(AbilitySlot::Passive),
            learned_via: self.learned_via.clone(),

            left_hand_id: id_of(EquipmentSlot::LeftHand),
            right_hand_id: id_of(EquipmentSlot::RightHand),
            head_id: id_of(EquipmentSlot::Head),
            body_id: id_of(EquipmentSlot::Body),
            accessory_id: id_of(EquipmentSlot::Accessory),

            total_experience: self.experience.total(),
            class_experience: self.experience.earned().clone(),
            class_experience_spent: self.experience.spent().clone(),

            wounds: core.wounds,
            mana_used: core.mana_used,
            turn_gauge: core.turn_gauge,
        }
    }

    /// Rebuild a unit from its save record
    ///
    /// Only an unknown primary class is fatal. Every other reference that
    /// does not resolve is left out of the unit and reported as a warning.
    pub fn from_record(
        record: UnitRecord,
        repo: &ContentRepository,
    ) -> Result<Restored<HumanoidUnit>, RestoreError> {
        let unit_class = repo
            .get_class_by_id(&record.unit_class_id)
            .ok_or_else(|| RestoreError::UnknownPrimaryClass(record.unit_class_id.clone()))?;

        let mut warnings = Vec::new();
        let mut core = UnitCore::new(record.name.clone(), unit_class);
        core.sprite_id = record.sprite_id.clone();
        core.is_player_controlled = record.is_player_controlled;
        core.base_stats = record.base_stats;
        core.rules = record.rules.unwrap_or_else(|| repo.rules());

        if let Some(id) = &record.secondary_class_id {
            match repo.get_class_by_id(id) {
                Some(class) => core.secondary_class = Some(class),
                None => warnings.push(RestoreWarning::SecondaryClass(id.clone())),
            }
        }

        for id in &record.learned_ability_ids {
            match repo.get_ability_by_id(id) {
                Some(ability) => {
                    core.insert_learned(ability);
                }
                None => warnings.push(RestoreWarning::LearnedAbility(id.clone())),
            }
        }

        for &slot in AbilitySlot::all() {
            if let Some(id) = record.ability_slot_id(slot) {
                match repo.get_ability_by_id(id) {
                    Some(ability) => *core.slot_mut(slot) = Some(ability),
                    None => warnings.push(RestoreWarning::AssignedAbility {
                        slot,
                        id: id.clone(),
                    }),
                }
            }
        }

        core.wounds = record.wounds;
        core.mana_used = record.mana_used;
        core.turn_gauge = record.turn_gauge;

        let learned_via = record
            .learned_via
            .iter()
            .filter(|(id, _)| core.learned_abilities.iter().any(|a| &a.id == *id))
            .map(|(id, class_id)| (id.clone(), class_id.clone()))
            .collect();

        let mut unit = HumanoidUnit {
            core,
            learned_via,
            equipment: Default::default(),
            experience: ExperienceLedger::from_parts(
                record.total_experience,
                record.class_experience.clone(),
                record.class_experience_spent.clone(),
            ),
        };

        for &slot in EquipmentSlot::all() {
            if let Some(id) = record.slot_id(slot) {
                match repo.get_equipment_by_id(id) {
                    // Stored equipment is trusted, type rules are not re-applied
                    Some(item) => {
                        unit.equipment.replace(slot, item);
                    }
                    None => warnings.push(RestoreWarning::Equipment {
                        slot,
                        id: id.clone(),
                    }),
                }
            }
        }

        for warning in &warnings {
            warn!("Restoring '{}': {}", record.name, warning);
        }

        Ok(Restored { unit, warnings })
    }
}
