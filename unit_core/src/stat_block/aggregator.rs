//! StatAccumulator - Collects stat contributions before building a StatBlock

use crate::stat_block::{StatBlock, StatValue};
use crate::types::Stat;
use std::collections::BTreeMap;

/// Accumulates stat contributions from various sources
///
/// Sources add to the base, fold in multipliers, or add flat deltas.
/// Once every source has been applied, `finish` produces the StatBlock.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    values: BTreeMap<Stat, StatValue>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, stat: Stat) -> &mut StatValue {
        self.values.entry(stat).or_default()
    }

    /// Add to the pre-multiplier base
    pub fn add_base(&mut self, stat: Stat, value: i32) {
        self.entry(stat).add_base(value);
    }

    /// Fold a multiplier into the stat
    pub fn multiply(&mut self, stat: Stat, factor: f64) {
        self.entry(stat).multiply(factor);
    }

    /// Add a post-multiplier flat delta
    pub fn add_flat(&mut self, stat: Stat, value: i32) {
        self.entry(stat).add_flat(value);
    }

    /// Current accumulated value for a stat
    pub fn get(&self, stat: Stat) -> StatValue {
        self.values.get(&stat).copied().unwrap_or_default()
    }

    /// Build the final StatBlock
    pub fn finish(self) -> StatBlock {
        let mut block = StatBlock::default();
        for (stat, value) in self.values {
            *block.get_mut(stat) = value;
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_stats_are_neutral() {
        let acc = StatAccumulator::new();
        let value = acc.get(Stat::Courage);
        assert_eq!(value.base, 0);
        assert!((value.multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(acc.finish().value(Stat::Courage), 0);
    }

    #[test]
    fn test_accumulate_and_finish() {
        let mut acc = StatAccumulator::new();
        acc.add_base(Stat::Speed, 8);
        acc.multiply(Stat::Speed, 1.5);
        acc.add_flat(Stat::Speed, 2);
        acc.add_base(Stat::MaxHealth, 40);

        let block = acc.finish();
        assert_eq!(block.value(Stat::Speed), 14);
        assert_eq!(block.value(Stat::MaxHealth), 40);
        assert_eq!(block.value(Stat::MagicPower), 0);
    }
}
