//! StatValue - A single stat split into base, multiplier and flat parts

use serde::{Deserialize, Serialize};

/// Represents a stat that follows the Base → Multiplier → Flat model
///
/// Final value is calculated as:
/// `round(base × multiplier) + flat`
///
/// - `base`: Unit base value plus class grants
/// - `multiplier`: Product of class multipliers (1.0 when none apply)
/// - `flat`: Sum of equipment deltas and active modifiers, applied after rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub base: i32,
    pub multiplier: f64,
    pub flat: i32,
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue {
            base: 0,
            multiplier: 1.0,
            flat: 0,
        }
    }
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: i32) -> Self {
        StatValue {
            base,
            ..Default::default()
        }
    }

    /// Calculate final value: round(base × multiplier) + flat
    pub fn compute(&self) -> i32 {
        self.scaled_base().saturating_add(self.flat)
    }

    /// The base after the multiplier, rounded half away from zero
    ///
    /// Out-of-range products saturate at the i32 bounds.
    pub fn scaled_base(&self) -> i32 {
        (f64::from(self.base) * self.multiplier).round() as i32
    }

    pub fn add_base(&mut self, value: i32) {
        self.base = self.base.saturating_add(value);
    }

    pub fn add_flat(&mut self, value: i32) {
        self.flat = self.flat.saturating_add(value);
    }

    /// Multipliers stack multiplicatively
    pub fn multiply(&mut self, factor: f64) {
        self.multiplier *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stat = StatValue::with_base(100);
        assert_eq!(stat.compute(), 100);
    }

    #[test]
    fn test_compute_with_multiplier_rounds() {
        let mut stat = StatValue::with_base(15);
        stat.multiply(1.25);
        // 18.75 rounds to 19
        assert_eq!(stat.compute(), 19);

        let mut stat = StatValue::with_base(10);
        stat.multiply(1.12);
        // 11.2 rounds to 11
        assert_eq!(stat.compute(), 11);
    }

    #[test]
    fn test_flat_applies_after_rounding() {
        let mut stat = StatValue::with_base(7);
        stat.multiply(1.5);
        stat.add_flat(3);
        stat.add_flat(-1);
        // round(10.5) = 11, + 2
        assert_eq!(stat.compute(), 13);
    }

    #[test]
    fn test_multiple_multipliers_stack_multiplicatively() {
        let mut stat = StatValue::with_base(100);
        stat.multiply(1.2);
        stat.multiply(1.5);
        assert_eq!(stat.compute(), 180);
    }

    #[test]
    fn test_negative_flat_can_go_below_zero() {
        let mut stat = StatValue::with_base(2);
        stat.add_flat(-5);
        assert_eq!(stat.compute(), -3);
    }

    #[test]
    fn test_negative_half_rounds_away_from_zero() {
        let mut stat = StatValue::with_base(-5);
        stat.multiply(1.5);
        // -7.5 goes to -8, not -7
        assert_eq!(stat.scaled_base(), -8);

        let mut stat = StatValue::with_base(5);
        stat.multiply(1.5);
        assert_eq!(stat.scaled_base(), 8);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let mut stat = StatValue::with_base(i32::MAX);
        stat.add_base(5);
        assert_eq!(stat.base, i32::MAX);
        stat.add_flat(i32::MAX);
        stat.add_flat(10);
        assert_eq!(stat.compute(), i32::MAX);

        stat.multiply(4.0);
        assert_eq!(stat.scaled_base(), i32::MAX);

        let mut low = StatValue::with_base(i32::MIN);
        low.add_base(-1);
        low.add_flat(i32::MIN);
        assert_eq!(low.compute(), i32::MIN);
    }
}
