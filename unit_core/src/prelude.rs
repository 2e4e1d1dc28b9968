//! Prelude module for convenient imports
//!
//! ```rust
//! use unit_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{StatBlock, StatValue};
pub use crate::types::{AbilityCategory, AbilitySlot, EquipmentSlot, EquipmentType, Stat, StatLine};

// Content
pub use crate::content::{CombatAbility, ContentRepository, Equipment, UnitClass};

// Units
pub use crate::unit::{CombatUnit, ExperienceLedger, HumanoidUnit, Unit};

// Modifiers
pub use crate::source::{ModifierDuration, StatModifier};

// Save/load
pub use crate::codec::{RestoreError, Restored, UnitRecord};

// Config
pub use crate::config::{default_content, UnitRules};
