//! StatModifier - Timed or permanent stat deltas granted by abilities

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::Stat;
use serde::{Deserialize, Serialize};

/// How long a modifier lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierDuration {
    /// Never decays
    Permanent,
    /// Turns remaining; removed on reaching 0
    Turns(u32),
}

/// A buff or debuff attached to a single unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub id: String,
    pub stat: Stat,
    /// Signed delta
    pub value: i32,
    pub duration: ModifierDuration,
    /// Id of the ability that granted this modifier
    pub source: String,
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl StatModifier {
    /// Create a modifier that lasts for a number of turns
    pub fn timed(
        id: impl Into<String>,
        stat: Stat,
        value: i32,
        turns: u32,
        source: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        StatModifier {
            id: id.into(),
            stat,
            value,
            duration: ModifierDuration::Turns(turns),
            source: source.into(),
            source_name: source_name.into(),
            icon: None,
        }
    }

    /// Create a modifier that never decays
    pub fn permanent(
        id: impl Into<String>,
        stat: Stat,
        value: i32,
        source: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        StatModifier {
            duration: ModifierDuration::Permanent,
            ..Self::timed(id, stat, value, 0, source, source_name)
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_permanent(&self) -> bool {
        self.duration == ModifierDuration::Permanent
    }

    /// Check if the modifier still applies
    pub fn is_active(&self) -> bool {
        match self.duration {
            ModifierDuration::Permanent => true,
            ModifierDuration::Turns(turns) => turns > 0,
        }
    }

    /// Advance one turn
    /// Returns true if the modifier is still active
    pub fn tick(&mut self) -> bool {
        if let ModifierDuration::Turns(turns) = &mut self.duration {
            *turns = turns.saturating_sub(1);
        }
        self.is_active()
    }
}

impl StatSource for StatModifier {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        200 // Modifiers apply last
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if !self.is_active() {
            return;
        }
        stats.add_flat(self.stat, self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_tick() {
        let mut haste = StatModifier::timed("haste_1", Stat::Speed, 2, 2, "haste", "Haste");
        assert!(haste.is_active());

        assert!(haste.tick());
        assert_eq!(haste.duration, ModifierDuration::Turns(1));

        assert!(!haste.tick());
        assert!(!haste.is_active());

        // Never underflows
        assert!(!haste.tick());
        assert_eq!(haste.duration, ModifierDuration::Turns(0));
    }

    #[test]
    fn test_permanent_never_decays() {
        let mut blessing =
            StatModifier::permanent("bless_1", Stat::Courage, 5, "bless", "Blessing");
        for _ in 0..100 {
            assert!(blessing.tick());
        }
        assert!(blessing.is_permanent());
    }

    #[test]
    fn test_modifier_applies_flat() {
        let curse = StatModifier::timed("curse_1", Stat::MagicEvade, -3, 1, "curse", "Curse");
        let mut acc = StatAccumulator::new();
        acc.add_base(Stat::MagicEvade, 10);
        curse.apply(&mut acc);
        assert_eq!(acc.get(Stat::MagicEvade).compute(), 7);
    }

    #[test]
    fn test_expired_modifier_contributes_nothing() {
        let mut shout = StatModifier::timed("shout_1", Stat::PhysicalPower, 4, 1, "shout", "Shout");
        shout.tick();
        let mut acc = StatAccumulator::new();
        shout.apply(&mut acc);
        assert_eq!(acc.get(Stat::PhysicalPower).compute(), 0);
    }

    #[test]
    fn test_modifier_priority() {
        let m = StatModifier::permanent("m", Stat::Speed, 1, "a", "A");
        assert_eq!(m.priority(), 200);
    }
}
