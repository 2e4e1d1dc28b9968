//! Unit rules configuration

use serde::{Deserialize, Serialize};

/// Policy switches for behaviour content authors may want to tighten
///
/// All switches default to off, which gives the permissive behaviour: only
/// the primary class shapes stats, any learned ability can sit in any slot,
/// and any item can go in any equipment slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitRules {
    /// Secondary class grants and multipliers also feed effective stats
    pub blend_secondary_class: bool,
    /// Ability slots only accept abilities of the matching category
    pub enforce_slot_category: bool,
    /// Equipment slots only accept items whose type fits the slot
    pub enforce_equipment_type: bool,
}

impl UnitRules {
    /// Every switch turned on
    pub fn strict() -> Self {
        UnitRules {
            blend_secondary_class: true,
            enforce_slot_category: true,
            enforce_equipment_type: true,
        }
    }
}
