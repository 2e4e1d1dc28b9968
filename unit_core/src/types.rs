//! Core types shared across the unit engine

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The ten stats every combat unit carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    MaxHealth,
    MaxMana,
    PhysicalPower,
    MagicPower,
    Speed,
    Movement,
    PhysicalEvade,
    MagicEvade,
    Courage,
    Attunement,
}

impl Stat {
    /// Get all stats in display order
    pub fn all() -> &'static [Stat] {
        &[
            Stat::MaxHealth,
            Stat::MaxMana,
            Stat::PhysicalPower,
            Stat::MagicPower,
            Stat::Speed,
            Stat::Movement,
            Stat::PhysicalEvade,
            Stat::MagicEvade,
            Stat::Courage,
            Stat::Attunement,
        ]
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::MaxHealth => "Max Health",
            Stat::MaxMana => "Max Mana",
            Stat::PhysicalPower => "Physical Power",
            Stat::MagicPower => "Magic Power",
            Stat::Speed => "Speed",
            Stat::Movement => "Movement",
            Stat::PhysicalEvade => "Physical Evade",
            Stat::MagicEvade => "Magic Evade",
            Stat::Courage => "Courage",
            Stat::Attunement => "Attunement",
        }
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max_health" | "health" => Ok(Stat::MaxHealth),
            "max_mana" | "mana" => Ok(Stat::MaxMana),
            "physical_power" => Ok(Stat::PhysicalPower),
            "magic_power" => Ok(Stat::MagicPower),
            "speed" => Ok(Stat::Speed),
            "movement" => Ok(Stat::Movement),
            "physical_evade" => Ok(Stat::PhysicalEvade),
            "magic_evade" => Ok(Stat::MagicEvade),
            "courage" => Ok(Stat::Courage),
            "attunement" => Ok(Stat::Attunement),
            _ => Err(format!("unknown stat '{}'", s)),
        }
    }
}

/// One integer per stat, every field defaulting to 0
///
/// Used for a unit's unmodified base values and for the fixed-shape
/// modifier record carried by each piece of equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub max_health: i32,
    pub max_mana: i32,
    pub physical_power: i32,
    pub magic_power: i32,
    pub speed: i32,
    pub movement: i32,
    pub physical_evade: i32,
    pub magic_evade: i32,
    pub courage: i32,
    pub attunement: i32,
}

impl StatLine {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::MaxHealth => self.max_health,
            Stat::MaxMana => self.max_mana,
            Stat::PhysicalPower => self.physical_power,
            Stat::MagicPower => self.magic_power,
            Stat::Speed => self.speed,
            Stat::Movement => self.movement,
            Stat::PhysicalEvade => self.physical_evade,
            Stat::MagicEvade => self.magic_evade,
            Stat::Courage => self.courage,
            Stat::Attunement => self.attunement,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        let slot = match stat {
            Stat::MaxHealth => &mut self.max_health,
            Stat::MaxMana => &mut self.max_mana,
            Stat::PhysicalPower => &mut self.physical_power,
            Stat::MagicPower => &mut self.magic_power,
            Stat::Speed => &mut self.speed,
            Stat::Movement => &mut self.movement,
            Stat::PhysicalEvade => &mut self.physical_evade,
            Stat::MagicEvade => &mut self.magic_evade,
            Stat::Courage => &mut self.courage,
            Stat::Attunement => &mut self.attunement,
        };
        *slot = value;
    }

    /// Builder-style setter
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Iterate over (stat, value) pairs that are not zero
    pub fn non_zero(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::all()
            .iter()
            .map(move |&stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value != 0)
    }
}

/// Ability category, which also names the slot it can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityCategory {
    Action,
    Reaction,
    Movement,
    Passive,
}

/// Assignable ability slots (actions are used from the class menu instead)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    Reaction,
    Movement,
    Passive,
}

impl AbilitySlot {
    pub fn all() -> &'static [AbilitySlot] {
        &[AbilitySlot::Reaction, AbilitySlot::Movement, AbilitySlot::Passive]
    }

    /// The ability category this slot is meant to hold
    pub fn category(&self) -> AbilityCategory {
        match self {
            AbilitySlot::Reaction => AbilityCategory::Reaction,
            AbilitySlot::Movement => AbilityCategory::Movement,
            AbilitySlot::Passive => AbilityCategory::Passive,
        }
    }
}

/// Equipment slot on a humanoid unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    LeftHand,
    RightHand,
    Head,
    Body,
    Accessory,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::LeftHand,
            EquipmentSlot::RightHand,
            EquipmentSlot::Head,
            EquipmentSlot::Body,
            EquipmentSlot::Accessory,
        ]
    }
}

/// Slot category of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    /// Weapon that can be dual wielded
    OneHanded,
    /// Weapon that occupies both hands
    TwoHanded,
    /// Shields and other off-hand items
    OffHand,
    Head,
    Body,
    Accessory,
}

impl EquipmentType {
    pub fn is_weapon(&self) -> bool {
        matches!(self, EquipmentType::OneHanded | EquipmentType::TwoHanded)
    }

    /// Whether an item of this type belongs in the given slot
    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        match slot {
            EquipmentSlot::LeftHand | EquipmentSlot::RightHand => matches!(
                self,
                EquipmentType::OneHanded | EquipmentType::TwoHanded | EquipmentType::OffHand
            ),
            EquipmentSlot::Head => *self == EquipmentType::Head,
            EquipmentSlot::Body => *self == EquipmentType::Body,
            EquipmentSlot::Accessory => *self == EquipmentType::Accessory,
        }
    }
}
