//! StatBlock - Effective unit stats composed from all sources

mod aggregator;
mod stat_value;

pub use aggregator::StatAccumulator;
pub use stat_value::StatValue;

use crate::source::StatSource;
use crate::types::{Stat, StatLine};
use serde::{Deserialize, Serialize};

/// Effective stat snapshot for a unit
///
/// Each field keeps its breakdown so display code can show where a number
/// came from. Use `value` for the final figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    // === Resources ===
    pub max_health: StatValue,
    pub max_mana: StatValue,

    // === Offense ===
    pub physical_power: StatValue,
    pub magic_power: StatValue,

    // === Tempo ===
    pub speed: StatValue,
    pub movement: StatValue,

    // === Defense ===
    pub physical_evade: StatValue,
    pub magic_evade: StatValue,

    // === Spirit ===
    pub courage: StatValue,
    pub attunement: StatValue,
}

impl StatBlock {
    /// Compose a StatBlock from a set of sources, applied in priority order
    pub fn from_sources(sources: &[&dyn StatSource]) -> Self {
        let mut sorted: Vec<_> = sources.to_vec();
        sorted.sort_by_key(|s| s.priority());

        let mut accumulator = StatAccumulator::new();
        for source in sorted {
            source.apply(&mut accumulator);
        }
        accumulator.finish()
    }

    /// Breakdown of a single stat
    pub fn get(&self, stat: Stat) -> &StatValue {
        match stat {
            Stat::MaxHealth => &self.max_health,
            Stat::MaxMana => &self.max_mana,
            Stat::PhysicalPower => &self.physical_power,
            Stat::MagicPower => &self.magic_power,
            Stat::Speed => &self.speed,
            Stat::Movement => &self.movement,
            Stat::PhysicalEvade => &self.physical_evade,
            Stat::MagicEvade => &self.magic_evade,
            Stat::Courage => &self.courage,
            Stat::Attunement => &self.attunement,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut StatValue {
        match stat {
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
        }
    }

    /// Base, multiplier and flat parts of a stat, for display
    pub fn breakdown(&self, stat: Stat) -> StatValue {
        *self.get(stat)
    }

    /// Final effective value of a stat
    pub fn value(&self, stat: Stat) -> i32 {
        self.get(stat).compute()
    }

    /// Flatten to final values only
    pub fn values(&self) -> StatLine {
        let mut line = StatLine::default();
        for &stat in Stat::all() {
            line.set(stat, self.value(stat));
        }
        line
    }
}
