//! BaseStatsSource - A unit's own unmodified stats

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::{Stat, StatLine};

/// Stats from the unit's base values
pub struct BaseStatsSource<'a> {
    pub base: &'a StatLine,
}

impl<'a> BaseStatsSource<'a> {
    pub fn new(base: &'a StatLine) -> Self {
        BaseStatsSource { base }
    }
}

impl StatSource for BaseStatsSource<'_> {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for &stat in Stat::all() {
            stats.add_base(stat, self.base.get(stat));
        }
    }
}
