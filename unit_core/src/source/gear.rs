//! GearSource - Stats from equipped items

use crate::content::Equipment;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::EquipmentSlot;

/// Stats from an equipped item
pub struct GearSource<'a> {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// The equipped item
    pub item: &'a Equipment,
}

impl<'a> GearSource<'a> {
    pub fn new(slot: EquipmentSlot, item: &'a Equipment) -> Self {
        GearSource { slot, item }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        &self.item.id
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        // Deltas land after the class multiplier, the slot does not matter
        for (stat, value) in self.item.modifiers.non_zero() {
            stats.add_flat(stat, value);
        }
    }
}
