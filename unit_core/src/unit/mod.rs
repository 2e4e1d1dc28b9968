//! Units - The capability set, concrete unit kinds and the experience ledger

mod combat_unit;
mod equipment;
mod experience;
mod humanoid;

pub use combat_unit::{CombatUnit, UnitCore};
pub use equipment::{EquipError, EquipmentSlots};
pub use experience::ExperienceLedger;
pub use humanoid::HumanoidUnit;

use crate::stat_block::StatBlock;

/// Every unit kind the engine knows about
///
/// Kind-specific capabilities are reached by matching, e.g. the equipment
/// slots through `as_humanoid`.
#[derive(Debug, Clone)]
pub enum Unit {
    Humanoid(HumanoidUnit),
}

impl Unit {
    pub fn as_humanoid(&self) -> Option<&HumanoidUnit> {
        match self {
            Unit::Humanoid(unit) => Some(unit),
        }
    }

    pub fn as_humanoid_mut(&mut self) -> Option<&mut HumanoidUnit> {
        match self {
            Unit::Humanoid(unit) => Some(unit),
        }
    }
}

impl From<HumanoidUnit> for Unit {
    fn from(unit: HumanoidUnit) -> Self {
        Unit::Humanoid(unit)
    }
}

impl CombatUnit for Unit {
    fn core(&self) -> &UnitCore {
        match self {
            Unit::Humanoid(unit) => unit.core(),
        }
    }

    fn core_mut(&mut self) -> &mut UnitCore {
        match self {
            Unit::Humanoid(unit) => unit.core_mut(),
        }
    }

    fn effective_stats(&self) -> StatBlock {
        match self {
            Unit::Humanoid(unit) => unit.effective_stats(),
        }
    }

    fn experience(&self) -> Option<&ExperienceLedger> {
        match self {
            Unit::Humanoid(unit) => unit.experience(),
        }
    }
}
