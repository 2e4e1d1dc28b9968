//! CombatUnit - The capability set shared by every unit kind

use crate::config::UnitRules;
use crate::content::{CombatAbility, UnitClass};
use crate::source::StatModifier;
use crate::stat_block::StatBlock;
use crate::types::{AbilitySlot, Stat, StatLine};
use crate::unit::ExperienceLedger;
use std::sync::Arc;
use tracing::debug;

/// State every unit kind carries
///
/// Identity, base stats, learned and assigned abilities, combat-session
/// counters and active modifiers.
#[derive(Debug, Clone)]
pub struct UnitCore {
    pub(crate) name: String,
    pub(crate) unit_class: Arc<UnitClass>,
    pub(crate) secondary_class: Option<Arc<UnitClass>>,
    pub(crate) sprite_id: String,
    pub(crate) base_stats: StatLine,

    pub(crate) learned_abilities: Vec<Arc<CombatAbility>>,
    pub(crate) reaction_ability: Option<Arc<CombatAbility>>,
    pub(crate) movement_ability: Option<Arc<CombatAbility>>,
    pub(crate) passive_ability: Option<Arc<CombatAbility>>,

    pub(crate) wounds: u32,
    pub(crate) mana_used: u32,
    pub(crate) turn_gauge: u32,
    pub(crate) is_player_controlled: bool,

    pub(crate) modifiers: Vec<StatModifier>,
    pub(crate) rules: UnitRules,
}

impl UnitCore {
    pub fn new(name: impl Into<String>, unit_class: Arc<UnitClass>) -> Self {
        UnitCore {
            name: name.into(),
            unit_class,
            secondary_class: None,
            sprite_id: String::new(),
            base_stats: StatLine::default(),
            learned_abilities: Vec::new(),
            reaction_ability: None,
            movement_ability: None,
            passive_ability: None,
            wounds: 0,
            mana_used: 0,
            turn_gauge: 0,
            is_player_controlled: false,
            modifiers: Vec::new(),
            rules: UnitRules::default(),
        }
    }

    pub(crate) fn slot(&self, slot: AbilitySlot) -> &Option<Arc<CombatAbility>> {
        match slot {
            AbilitySlot::Reaction => &self.reaction_ability,
            AbilitySlot::Movement => &self.movement_ability,
            AbilitySlot::Passive => &self.passive_ability,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: AbilitySlot) -> &mut Option<Arc<CombatAbility>> {
        match slot {
            AbilitySlot::Reaction => &mut self.reaction_ability,
            AbilitySlot::Movement => &mut self.movement_ability,
            AbilitySlot::Passive => &mut self.passive_ability,
        }
    }

    /// Add to the learned set, ignoring duplicates
    pub(crate) fn insert_learned(&mut self, ability: Arc<CombatAbility>) -> bool {
        if self.learned_abilities.iter().any(|a| a.id == ability.id) {
            return false;
        }
        self.learned_abilities.push(ability);
        true
    }
}

/// Capability set shared by every unit kind
///
/// Implementors expose their `UnitCore` and compose their own effective
/// stats; everything else is provided.
pub trait CombatUnit {
    fn core(&self) -> &UnitCore;

    fn core_mut(&mut self) -> &mut UnitCore;

    /// Compose effective stats from every source the unit kind has
    fn effective_stats(&self) -> StatBlock;

    /// The experience economy, for unit kinds that have one
    fn experience(&self) -> Option<&ExperienceLedger> {
        None
    }

    fn has_experience_economy(&self) -> bool {
        self.experience().is_some()
    }

    // === Identity ===

    fn name(&self) -> &str {
        &self.core().name
    }

    fn unit_class(&self) -> &Arc<UnitClass> {
        &self.core().unit_class
    }

    fn set_unit_class(&mut self, class: Arc<UnitClass>) {
        self.core_mut().unit_class = class;
    }

    fn secondary_class(&self) -> Option<&Arc<UnitClass>> {
        self.core().secondary_class.as_ref()
    }

    /// Set or clear the secondary class
    ///
    /// Unlock requirements are not checked here; callers check
    /// `UnitClass::requirements_met` first.
    fn set_secondary_class(&mut self, class: Option<Arc<UnitClass>>) {
        self.core_mut().secondary_class = class;
    }

    fn sprite_id(&self) -> &str {
        &self.core().sprite_id
    }

    fn rules(&self) -> UnitRules {
        self.core().rules
    }

    fn is_player_controlled(&self) -> bool {
        self.core().is_player_controlled
    }

    fn set_player_controlled(&mut self, value: bool) {
        self.core_mut().is_player_controlled = value;
    }

    // === Stats ===

    fn base_stats(&self) -> &StatLine {
        &self.core().base_stats
    }

    fn base_stat(&self, stat: Stat) -> i32 {
        self.core().base_stats.get(stat)
    }

    fn set_base_stat(&mut self, stat: Stat, value: i32) {
        self.core_mut().base_stats.set(stat, value);
    }

    fn effective_stat(&self, stat: Stat) -> i32 {
        self.effective_stats().value(stat)
    }

    fn max_health(&self) -> i32 {
        self.effective_stat(Stat::MaxHealth)
    }

    fn max_mana(&self) -> i32 {
        self.effective_stat(Stat::MaxMana)
    }

    /// Max health minus wounds, never below 0
    fn health(&self) -> i32 {
        let health = i64::from(self.max_health()) - i64::from(self.core().wounds);
        health.max(0) as i32
    }

    /// Max mana minus mana used, never below 0
    fn mana(&self) -> i32 {
        let mana = i64::from(self.max_mana()) - i64::from(self.core().mana_used);
        mana.max(0) as i32
    }

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    // === Combat counters ===

    fn wounds(&self) -> u32 {
        self.core().wounds
    }

    fn take_damage(&mut self, amount: u32) {
        let core = self.core_mut();
        core.wounds = core.wounds.saturating_add(amount);
    }

    fn heal(&mut self, amount: u32) {
        let core = self.core_mut();
        core.wounds = core.wounds.saturating_sub(amount);
    }

    fn mana_used(&self) -> u32 {
        self.core().mana_used
    }

    fn spend_mana(&mut self, amount: u32) {
        let core = self.core_mut();
        core.mana_used = core.mana_used.saturating_add(amount);
    }

    fn restore_mana(&mut self, amount: u32) {
        let core = self.core_mut();
        core.mana_used = core.mana_used.saturating_sub(amount);
    }

    fn turn_gauge(&self) -> u32 {
        self.core().turn_gauge
    }

    fn advance_turn_gauge(&mut self, amount: u32) {
        let core = self.core_mut();
        core.turn_gauge = core.turn_gauge.saturating_add(amount);
    }

    fn reset_turn_gauge(&mut self) {
        self.core_mut().turn_gauge = 0;
    }

    /// Clear wounds, mana used, the turn gauge and timed modifiers
    fn reset_combat_state(&mut self) {
        let core = self.core_mut();
        core.wounds = 0;
        core.mana_used = 0;
        core.turn_gauge = 0;
        core.modifiers.retain(|m| m.is_permanent());
    }

    // === Abilities ===

    fn learned_abilities(&self) -> &[Arc<CombatAbility>] {
        &self.core().learned_abilities
    }

    fn has_ability(&self, ability: &CombatAbility) -> bool {
        self.core().learned_abilities.iter().any(|a| a.id == ability.id)
    }

    fn ability_in_slot(&self, slot: AbilitySlot) -> Option<&Arc<CombatAbility>> {
        self.core().slot(slot).as_ref()
    }

    fn reaction_ability(&self) -> Option<&Arc<CombatAbility>> {
        self.ability_in_slot(AbilitySlot::Reaction)
    }

    fn movement_ability(&self) -> Option<&Arc<CombatAbility>> {
        self.ability_in_slot(AbilitySlot::Movement)
    }

    fn passive_ability(&self) -> Option<&Arc<CombatAbility>> {
        self.ability_in_slot(AbilitySlot::Passive)
    }

    /// Put a learned ability in a slot; costs no experience
    ///
    /// Returns false if the ability has not been learned, or if the rules
    /// enforce slot categories and the category does not match.
    fn assign_ability(&mut self, slot: AbilitySlot, ability: &Arc<CombatAbility>) -> bool {
        if !self.has_ability(ability) {
            debug!("{}: cannot assign unlearned ability '{}'", self.name(), ability.id);
            return false;
        }
        if self.rules().enforce_slot_category && ability.category != slot.category() {
            debug!(
                "{}: ability '{}' is {:?}, not {:?}",
                self.name(),
                ability.id,
                ability.category,
                slot.category()
            );
            return false;
        }
        *self.core_mut().slot_mut(slot) = Some(Arc::clone(ability));
        true
    }

    fn assign_reaction_ability(&mut self, ability: &Arc<CombatAbility>) -> bool {
        self.assign_ability(AbilitySlot::Reaction, ability)
    }

    fn assign_movement_ability(&mut self, ability: &Arc<CombatAbility>) -> bool {
        self.assign_ability(AbilitySlot::Movement, ability)
    }

    fn assign_passive_ability(&mut self, ability: &Arc<CombatAbility>) -> bool {
        self.assign_ability(AbilitySlot::Passive, ability)
    }

    /// Empty a slot, returning what was in it
    fn clear_slot(&mut self, slot: AbilitySlot) -> Option<Arc<CombatAbility>> {
        self.core_mut().slot_mut(slot).take()
    }

    /// Clear every slot holding the given ability
    fn unassign_ability(&mut self, ability: &CombatAbility) {
        for &slot in AbilitySlot::all() {
            let held = self.core_mut().slot_mut(slot);
            if held.as_ref().is_some_and(|a| a.id == ability.id) {
                *held = None;
            }
        }
    }

    // === Modifiers ===

    fn modifiers(&self) -> &[StatModifier] {
        &self.core().modifiers
    }

    /// Attach a modifier; one with the same id is replaced
    fn apply_modifier(&mut self, modifier: StatModifier) {
        let modifiers = &mut self.core_mut().modifiers;
        if let Some(existing) = modifiers.iter_mut().find(|m| m.id == modifier.id) {
            *existing = modifier;
        } else {
            modifiers.push(modifier);
        }
    }

    /// Remove a modifier by id, returning it if present
    fn remove_modifier(&mut self, id: &str) -> Option<StatModifier> {
        let modifiers = &mut self.core_mut().modifiers;
        let index = modifiers.iter().position(|m| m.id == id)?;
        Some(modifiers.remove(index))
    }

    /// Remove every modifier granted by an ability
    fn remove_modifiers_from(&mut self, source: &str) -> Vec<StatModifier> {
        let modifiers = std::mem::take(&mut self.core_mut().modifiers);
        let (removed, kept): (Vec<_>, Vec<_>) =
            modifiers.into_iter().partition(|m| m.source == source);
        self.core_mut().modifiers = kept;
        removed
    }

    /// Advance every timed modifier by one turn, returning those that expired
    fn tick_modifiers(&mut self) -> Vec<StatModifier> {
        let modifiers = std::mem::take(&mut self.core_mut().modifiers);
        let mut kept = Vec::with_capacity(modifiers.len());
        let mut expired = Vec::new();
        for mut modifier in modifiers {
            if modifier.tick() {
                kept.push(modifier);
            } else {
                expired.push(modifier);
            }
        }
        if !expired.is_empty() {
            debug!("{}: {} modifier(s) expired", self.name(), expired.len());
        }
        self.core_mut().modifiers = kept;
        expired
    }
}
