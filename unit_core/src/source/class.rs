//! ClassSource - Grants and multipliers from a unit class

use crate::content::UnitClass;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Stats from a unit's class
///
/// Grants add to the base before the multiplier is applied. Only the primary
/// class contributes unless secondary blending is switched on in the rules.
pub struct ClassSource<'a> {
    pub class: &'a UnitClass,
}

impl<'a> ClassSource<'a> {
    pub fn new(class: &'a UnitClass) -> Self {
        ClassSource { class }
    }
}

impl StatSource for ClassSource<'_> {
    fn id(&self) -> &str {
        &self.class.id
    }

    fn priority(&self) -> i32 {
        -50 // After base stats, before gear
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (&stat, &grant) in &self.class.base_stat_grants {
            stats.add_base(stat, grant);
        }
        for (&stat, &factor) in &self.class.stat_multipliers {
            stats.multiply(stat, factor);
        }
    }
}
