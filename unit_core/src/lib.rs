//! unit_core - Progression and stat resolution for tactical combat units
//!
//! This library provides:
//! - ContentRepository: Classes, abilities and equipment loaded once per session
//! - StatBlock: Effective stats composed from base values, class, gear and modifiers
//! - HumanoidUnit: Equipment slots and the per-class experience economy
//! - UnitRecord: The save format, restored with dangling references reported

pub mod codec;
pub mod config;
pub mod content;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use codec::{RestoreError, RestoreWarning, Restored, UnitRecord};
pub use config::{default_content, load_content, parse_content, ConfigError, UnitRules};
pub use content::{CombatAbility, ContentError, ContentRepository, Equipment, Registry, UnitClass};
pub use source::{BaseStatsSource, ClassSource, GearSource, ModifierDuration, StatModifier, StatSource};
pub use stat_block::{StatAccumulator, StatBlock, StatValue};
pub use types::{AbilityCategory, AbilitySlot, EquipmentSlot, EquipmentType, Stat, StatLine};
pub use unit::{CombatUnit, EquipError, ExperienceLedger, HumanoidUnit, Unit, UnitCore};
