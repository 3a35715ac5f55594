//! Unit selection: which power-of-1000 value one cube stands for.

use numcube_core::Magnitude;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::LayoutPolicy;

/// The building block chosen for a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitChoice {
    /// Value represented by one unit cube (always `1000^k`).
    pub unit_value: Magnitude,
    /// Side length of one unit cube in centimetres (`10^k`).
    pub unit_side_cm: f64,
    /// Number of unit cubes, `value / unit_value` rounded down.
    pub unit_count: Magnitude,
    /// The value is an exact power of 1000 shown as 1000 cubes of the
    /// previous bracket instead of a single cube.
    pub collapsed: bool,
}

impl UnitChoice {
    /// The zero layout: no cubes of the smallest unit.
    pub const EMPTY: Self = Self {
        unit_value: Magnitude::ONE,
        unit_side_cm: 1.0,
        unit_count: Magnitude::ZERO,
        collapsed: false,
    };

    /// Value covered by the cubes, `unit_value * unit_count`.
    pub fn covered(&self) -> Magnitude {
        // unit_count = value / unit_value, so the product never exceeds value.
        self.unit_value
            .checked_mul(self.unit_count)
            .unwrap_or(Magnitude::new(u128::MAX))
    }

    /// Instance count as a machine integer, saturating at `u32::MAX`.
    pub fn instance_count(&self) -> u32 {
        u32::try_from(self.unit_count).unwrap_or(u32::MAX)
    }
}

impl LayoutPolicy {
    /// Pick the unit cube value and count for `value`.
    ///
    /// Values below 1000 use unit 1. An exact power of 1000 becomes 1000
    /// cubes of the previous bracket. Anything else uses the unit of its own
    /// bracket, stepping up while the count exceeds `max_unit_instances`.
    pub fn choose_unit(&self, value: Magnitude) -> UnitChoice {
        if value.is_zero() {
            return UnitChoice::EMPTY;
        }

        let bracket = value.bracket();
        if bracket >= 1 && value.is_power_of_1000() {
            return UnitChoice {
                unit_value: value / Magnitude::THOUSAND,
                unit_side_cm: side_for_bracket(bracket - 1),
                unit_count: Magnitude::THOUSAND,
                collapsed: true,
            };
        }

        // value has at least 3k+1 digits, so 1000^k <= value always fits.
        let mut unit_value = Magnitude::pow1000(bracket).unwrap_or(value);
        let mut exponent = bracket;
        let mut unit_count = value / unit_value;
        let cap = Magnitude::from(self.max_unit_instances);

        while unit_count > cap {
            let Some(next) = unit_value.checked_mul(Magnitude::THOUSAND) else {
                break;
            };
            unit_value = next;
            exponent += 1;
            unit_count = value / unit_value;
            trace!(%value, %unit_value, %unit_count, "unit stepped up a bracket");
        }

        UnitChoice {
            unit_value,
            unit_side_cm: side_for_bracket(exponent),
            unit_count,
            collapsed: false,
        }
    }
}

/// Pick the unit cube for `value` under the default policy.
pub fn choose_unit_for_value(value: Magnitude) -> UnitChoice {
    LayoutPolicy::DEFAULT.choose_unit(value)
}

/// One decimal order of length per power of 1000 of value.
fn side_for_bracket(exponent: u32) -> f64 {
    10f64.powi(exponent as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(value: u128) -> Magnitude {
        Magnitude::new(value)
    }

    #[test]
    fn zero_is_the_empty_unit() {
        assert_eq!(choose_unit_for_value(Magnitude::ZERO), UnitChoice::EMPTY);
    }

    #[test]
    fn small_values_use_unit_one() {
        for value in [1, 7, 100, 999] {
            let unit = choose_unit_for_value(m(value));
            assert_eq!(unit.unit_value, Magnitude::ONE);
            assert_eq!(unit.unit_count, m(value));
            assert_eq!(unit.unit_side_cm, 1.0);
            assert!(!unit.collapsed);
        }
    }

    #[test]
    fn thousand_collapses_to_a_thousand_ones() {
        let unit = choose_unit_for_value(Magnitude::THOUSAND);
        assert_eq!(unit.unit_value, Magnitude::ONE);
        assert_eq!(unit.unit_count, Magnitude::THOUSAND);
        assert_eq!(unit.unit_side_cm, 1.0);
        assert!(unit.collapsed);
    }

    #[test]
    fn million_collapses_to_a_thousand_thousands() {
        let unit = choose_unit_for_value(m(1_000_000));
        assert_eq!(unit.unit_value, Magnitude::THOUSAND);
        assert_eq!(unit.unit_count, Magnitude::THOUSAND);
        assert_eq!(unit.unit_side_cm, 10.0);
    }

    #[test]
    fn non_multiples_round_down() {
        let unit = choose_unit_for_value(m(12_345));
        assert_eq!(unit.unit_value, Magnitude::THOUSAND);
        assert_eq!(unit.unit_count, m(12));
        assert_eq!(unit.unit_side_cm, 10.0);
        assert_eq!(unit.covered(), m(12_000));
    }

    #[test]
    fn top_of_the_step_table() {
        let unit = choose_unit_for_value(m(100_000_000_000_000_000));
        assert_eq!(unit.unit_value, m(1_000_000_000_000_000));
        assert_eq!(unit.unit_count, m(100));
        assert_eq!(unit.unit_side_cm, 100_000.0);
    }

    #[test]
    fn small_cap_steps_up_and_scales_side() {
        let policy = LayoutPolicy::new(10, 10);
        let unit = policy.choose_unit(m(12_345));
        assert_eq!(unit.unit_value, m(1_000_000));
        assert_eq!(unit.unit_count, Magnitude::ZERO);
        assert_eq!(unit.unit_side_cm, 100.0);

        let unit = policy.choose_unit(m(500));
        assert_eq!(unit.unit_value, Magnitude::THOUSAND);
        assert_eq!(unit.unit_count, Magnitude::ZERO);

        let unit = policy.choose_unit(m(8));
        assert_eq!(unit.unit_count, m(8));
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let unit = choose_unit_for_value(Magnitude::new(u128::MAX));
        assert!(unit.unit_count <= Magnitude::THOUSAND);
        assert!(unit.covered() <= Magnitude::new(u128::MAX));

        let unit = LayoutPolicy::new(1, 10).choose_unit(Magnitude::new(u128::MAX));
        assert!(unit.unit_count <= Magnitude::THOUSAND);
    }
}
