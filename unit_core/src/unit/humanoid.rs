//! HumanoidUnit - Units with equipment slots and an experience economy

use crate::config::UnitRules;
use crate::content::{CombatAbility, Equipment, UnitClass};
use crate::source::{BaseStatsSource, ClassSource, GearSource, StatSource};
use crate::stat_block::StatBlock;
use crate::types::{EquipmentSlot, StatLine};
use crate::unit::{CombatUnit, EquipError, EquipmentSlots, ExperienceLedger, UnitCore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A humanoid combat unit
///
/// Adds dual-wield and armor slots and the per-class experience ledger that
/// gates ability learning.
#[derive(Debug, Clone)]
pub struct HumanoidUnit {
    pub(crate) core: UnitCore,
    pub(crate) equipment: EquipmentSlots,
    pub(crate) experience: ExperienceLedger,
    /// Learned ability id -> id of the class that paid for it
    pub(crate) learned_via: BTreeMap<String, String>,
}

impl HumanoidUnit {
    pub fn new(name: impl Into<String>, unit_class: Arc<UnitClass>) -> Self {
        HumanoidUnit {
            core: UnitCore::new(name, unit_class),
            equipment: EquipmentSlots::default(),
            experience: ExperienceLedger::new(),
            learned_via: BTreeMap::new(),
        }
    }

    pub fn with_base_stats(mut self, base_stats: StatLine) -> Self {
        self.core.base_stats = base_stats;
        self
    }

    pub fn with_sprite(mut self, sprite_id: impl Into<String>) -> Self {
        self.core.sprite_id = sprite_id.into();
        self
    }

    pub fn with_rules(mut self, rules: UnitRules) -> Self {
        self.core.rules = rules;
        self
    }

    pub fn player_controlled(mut self) -> Self {
        self.core.is_player_controlled = true;
        self
    }

    // === Experience ===

    /// Grant experience, crediting the given class if any
    pub fn add_experience(&mut self, amount: u32, class: Option<&UnitClass>) {
        self.experience.add(amount, class.map(|c| c.id.as_str()));
    }

    /// Learn an ability by spending the class's unspent experience
    ///
    /// Returns false with no state change if the ability is not learnable
    /// from `class`, is already learned, or costs more than the class's
    /// unspent experience.
    pub fn learn_ability(&mut self, ability: &Arc<CombatAbility>, class: &UnitClass) -> bool {
        if !class.can_learn(ability) {
            debug!(
                "{}: '{}' is not learnable as {}",
                self.core.name, ability.id, class.id
            );
            return false;
        }
        if self.has_ability(ability) {
            debug!("{}: '{}' already learned", self.core.name, ability.id);
            return false;
        }
        if !self.experience.spend(&class.id, ability.experience_price) {
            debug!(
                "{}: '{}' costs {}, only {} unspent in {}",
                self.core.name,
                ability.id,
                ability.experience_price,
                self.experience.unspent_class_experience(&class.id),
                class.id
            );
            return false;
        }
        self.core.insert_learned(Arc::clone(ability));
        self.learned_via.insert(ability.id.clone(), class.id.clone());
        true
    }

    /// Forget an ability and refund its full price to the class
    ///
    /// Slots holding the ability are left alone; call `unassign_ability`
    /// to clear them. Returns false if the ability is not learned, not
    /// learnable from `class`, or was paid for by a different class.
    pub fn forget_ability(&mut self, ability: &CombatAbility, class: &UnitClass) -> bool {
        if !class.can_learn(ability) || !self.has_ability(ability) {
            return false;
        }
        if let Some(paid_by) = self.learned_via.get(&ability.id) {
            if *paid_by != class.id {
                debug!(
                    "{}: '{}' was paid for by {}, not {}",
                    self.core.name, ability.id, paid_by, class.id
                );
                return false;
            }
        }
        self.core.learned_abilities.retain(|a| a.id != ability.id);
        self.learned_via.remove(&ability.id);
        self.experience.refund(&class.id, ability.experience_price);
        true
    }

    /// Id of the class whose experience paid for a learned ability
    pub fn learned_via(&self, ability: &CombatAbility) -> Option<&str> {
        self.learned_via.get(&ability.id).map(String::as_str)
    }

    pub fn experience_ledger(&self) -> &ExperienceLedger {
        &self.experience
    }

    pub fn total_experience(&self) -> u32 {
        self.experience.total()
    }

    pub fn unspent_experience(&self) -> u32 {
        self.experience.unspent_experience()
    }

    pub fn class_experience(&self, class: &UnitClass) -> u32 {
        self.experience.class_experience(&class.id)
    }

    pub fn class_experience_spent(&self, class: &UnitClass) -> u32 {
        self.experience.class_experience_spent(&class.id)
    }

    pub fn unspent_class_experience(&self, class: &UnitClass) -> u32 {
        self.experience.unspent_class_experience(&class.id)
    }

    // === Equipment ===

    /// Equip an item, returning whatever the slot held before
    ///
    /// The previous item is handed back to the caller rather than stored
    /// anywhere. Type compatibility is only checked when the rules ask for it.
    pub fn equip(
        &mut self,
        slot: EquipmentSlot,
        item: Arc<Equipment>,
    ) -> Result<Option<Arc<Equipment>>, EquipError> {
        if self.core.rules.enforce_equipment_type && !item.equipment_type.fits(slot) {
            return Err(EquipError::SlotMismatch {
                item: item.id.clone(),
                slot,
            });
        }
        Ok(self.equipment.replace(slot, item))
    }

    pub fn equip_left_hand(&mut self, item: Arc<Equipment>) -> Result<Option<Arc<Equipment>>, EquipError> {
        self.equip(EquipmentSlot::LeftHand, item)
    }

    pub fn equip_right_hand(&mut self, item: Arc<Equipment>) -> Result<Option<Arc<Equipment>>, EquipError> {
        self.equip(EquipmentSlot::RightHand, item)
    }

    pub fn equip_head(&mut self, item: Arc<Equipment>) -> Result<Option<Arc<Equipment>>, EquipError> {
        self.equip(EquipmentSlot::Head, item)
    }

    pub fn equip_body(&mut self, item: Arc<Equipment>) -> Result<Option<Arc<Equipment>>, EquipError> {
        self.equip(EquipmentSlot::Body, item)
    }

    pub fn equip_accessory(&mut self, item: Arc<Equipment>) -> Result<Option<Arc<Equipment>>, EquipError> {
        self.equip(EquipmentSlot::Accessory, item)
    }

    /// Empty a slot, returning the item if present
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Arc<Equipment>> {
        self.equipment.take(slot)
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Arc<Equipment>> {
        self.equipment.get(slot)
    }

    pub fn left_hand(&self) -> Option<&Arc<Equipment>> {
        self.equipment.left_hand.as_ref()
    }

    pub fn right_hand(&self) -> Option<&Arc<Equipment>> {
        self.equipment.right_hand.as_ref()
    }

    pub fn head(&self) -> Option<&Arc<Equipment>> {
        self.equipment.head.as_ref()
    }

    pub fn body(&self) -> Option<&Arc<Equipment>> {
        self.equipment.body.as_ref()
    }

    pub fn accessory(&self) -> Option<&Arc<Equipment>> {
        self.equipment.accessory.as_ref()
    }

    pub fn all_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &Arc<Equipment>)> {
        self.equipment.iter()
    }
}

impl CombatUnit for HumanoidUnit {
    fn core(&self) -> &UnitCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut UnitCore {
        &mut self.core
    }

    fn effective_stats(&self) -> StatBlock {
        let base = BaseStatsSource::new(&self.core.base_stats);
        let primary = ClassSource::new(&self.core.unit_class);
        let secondary = self
            .core
            .secondary_class
            .as_deref()
            .filter(|_| self.core.rules.blend_secondary_class)
            .map(ClassSource::new);
        let gear: Vec<GearSource> = self
            .equipment
            .iter()
            .map(|(slot, item)| GearSource::new(slot, item))
            .collect();

        let mut sources: Vec<&dyn StatSource> = vec![&base, &primary];
        if let Some(secondary) = &secondary {
            sources.push(secondary);
        }
        sources.extend(gear.iter().map(|g| g as &dyn StatSource));
        sources.extend(self.core.modifiers.iter().map(|m| m as &dyn StatSource));

        StatBlock::from_sources(&sources)
    }

    fn experience(&self) -> Option<&ExperienceLedger> {
        Some(&self.experience)
    }
}
