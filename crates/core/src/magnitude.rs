//! Exact non-negative integers for the values the explorer visualizes.
//!
//! The step table reaches 10^17, past the point where `f64` stops holding
//! every integer exactly (2^53). All value arithmetic therefore stays in
//! `u128`; only derived lengths in centimetres are floating point.

use std::fmt;
use std::ops::{Div, Rem, Sub};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MagnitudeError;

/// An exact non-negative integer value being visualized.
///
/// Serialized as a decimal string so JSON consumers never round it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Magnitude(u128);

impl Magnitude {
    /// Nothing to draw.
    pub const ZERO: Self = Self(0);
    /// A single unit cube.
    pub const ONE: Self = Self(1);
    /// One power-of-1000 bracket.
    pub const THOUSAND: Self = Self(1000);

    /// Wrap a raw integer.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// The raw integer.
    pub const fn get(self) -> u128 {
        self.0
    }

    /// Returns true for zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of decimal digits; zero has one digit.
    pub const fn digit_count(self) -> u32 {
        match self.0.checked_ilog10() {
            Some(log) => log + 1,
            None => 1,
        }
    }

    /// Power-of-1000 bracket: 0 for 0..=999, 1 for thousands, 2 for millions...
    pub const fn bracket(self) -> u32 {
        (self.digit_count() - 1) / 3
    }

    /// `1000^exp`, or `None` once it no longer fits.
    pub const fn pow1000(exp: u32) -> Option<Self> {
        match 1000u128.checked_pow(exp) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// True when the value is `1000^k` for some `k >= 0`.
    pub fn is_power_of_1000(self) -> bool {
        if self.0 == 0 {
            return false;
        }
        let mut v = self.0;
        while v % 1000 == 0 {
            v /= 1000;
        }
        v == 1
    }

    /// Checked multiplication.
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Nearest `f64`; exact below 2^53.
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    /// Decimal string with comma thousands separators, e.g. `1,000,000`.
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses plain decimal digits. `_` and `,` are accepted as group
/// separators so `1_000_000` and `1,000,000` both work.
impl FromStr for Magnitude {
    type Err = MagnitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = match s.strip_prefix('-') {
            Some(_) => return Err(MagnitudeError::Negative),
            None => s.strip_prefix('+').unwrap_or(s),
        };
        let offset = s.len() - body.len();

        let mut value: u128 = 0;
        let mut seen_digit = false;
        for (i, ch) in body.char_indices() {
            match ch {
                '_' | ',' => continue,
                '0'..='9' => {
                    let digit = u128::from(ch as u8 - b'0');
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(MagnitudeError::Overflow)?;
                    seen_digit = true;
                }
                found => {
                    return Err(MagnitudeError::InvalidDigit {
                        position: offset + i,
                        found,
                    })
                }
            }
        }

        if !seen_digit {
            return Err(MagnitudeError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<u32> for Magnitude {
    fn from(value: u32) -> Self {
        Self(u128::from(value))
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Magnitude {
    type Error = MagnitudeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| MagnitudeError::Negative)
    }
}

impl TryFrom<Magnitude> for u32 {
    type Error = MagnitudeError;

    fn try_from(value: Magnitude) -> Result<Self, Self::Error> {
        u32::try_from(value.0).map_err(|_| MagnitudeError::Overflow)
    }
}

impl Div for Magnitude {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Rem for Magnitude {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl Sub for Magnitude {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Magnitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MagnitudeVisitor)
    }
}

struct MagnitudeVisitor;

impl<'de> Visitor<'de> for MagnitudeVisitor {
    type Value = Magnitude;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Magnitude, E> {
        Ok(Magnitude::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Magnitude, E> {
        Ok(Magnitude::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Magnitude, E> {
        Magnitude::try_from(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Magnitude, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_and_bracket() {
        assert_eq!(Magnitude::ZERO.digit_count(), 1);
        assert_eq!(Magnitude::new(9).digit_count(), 1);
        assert_eq!(Magnitude::new(999).bracket(), 0);
        assert_eq!(Magnitude::new(1000).bracket(), 1);
        assert_eq!(Magnitude::new(12_345).digit_count(), 5);
        assert_eq!(Magnitude::new(12_345).bracket(), 1);
        assert_eq!(Magnitude::new(100_000_000_000_000_000).bracket(), 5);
    }

    #[test]
    fn powers_of_1000_are_recognized() {
        assert!(Magnitude::ONE.is_power_of_1000());
        assert!(Magnitude::THOUSAND.is_power_of_1000());
        assert!(Magnitude::new(1_000_000_000_000_000).is_power_of_1000());
        assert!(!Magnitude::ZERO.is_power_of_1000());
        assert!(!Magnitude::new(100).is_power_of_1000());
        assert!(!Magnitude::new(10_000).is_power_of_1000());
        assert!(!Magnitude::new(2_000_000).is_power_of_1000());
    }

    #[test]
    fn pow1000_saturates_to_none() {
        assert_eq!(Magnitude::pow1000(0), Some(Magnitude::ONE));
        assert_eq!(Magnitude::pow1000(2), Some(Magnitude::new(1_000_000)));
        assert!(Magnitude::pow1000(12).is_some());
        assert_eq!(Magnitude::pow1000(13), None);
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(Magnitude::ZERO.grouped(), "0");
        assert_eq!(Magnitude::new(999).grouped(), "999");
        assert_eq!(Magnitude::THOUSAND.grouped(), "1,000");
        assert_eq!(Magnitude::new(1_234_567).grouped(), "1,234,567");
        assert_eq!(
            Magnitude::new(100_000_000_000_000_000).grouped(),
            "100,000,000,000,000,000"
        );
    }

    #[test]
    fn parse_accepts_separators_and_rejects_garbage() {
        assert_eq!("1000".parse(), Ok(Magnitude::THOUSAND));
        assert_eq!(" 1_000_000 ".parse(), Ok(Magnitude::new(1_000_000)));
        assert_eq!("1,000".parse(), Ok(Magnitude::THOUSAND));
        assert_eq!("+7".parse(), Ok(Magnitude::new(7)));
        assert_eq!("".parse::<Magnitude>(), Err(MagnitudeError::Empty));
        assert_eq!("_".parse::<Magnitude>(), Err(MagnitudeError::Empty));
        assert_eq!("-5".parse::<Magnitude>(), Err(MagnitudeError::Negative));
        assert_eq!(
            "12a".parse::<Magnitude>(),
            Err(MagnitudeError::InvalidDigit {
                position: 2,
                found: 'a'
            })
        );
        assert_eq!(
            "999999999999999999999999999999999999999999".parse::<Magnitude>(),
            Err(MagnitudeError::Overflow)
        );
    }

    #[test]
    fn negative_integers_are_rejected() {
        assert_eq!(Magnitude::try_from(-1i64), Err(MagnitudeError::Negative));
        assert_eq!(Magnitude::try_from(42i64), Ok(Magnitude::new(42)));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let value = Magnitude::new(100_000_000_000_000_000);
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, "\"100000000000000000\"");
        let back: Magnitude = serde_json::from_str(&json).expect("deserialize string");
        assert_eq!(back, value);
        let from_number: Magnitude = serde_json::from_str("12345").expect("deserialize number");
        assert_eq!(from_number, Magnitude::new(12_345));
        assert!(serde_json::from_str::<Magnitude>("-3").is_err());
    }

    #[test]
    fn floor_division_and_remainder() {
        let value = Magnitude::new(12_345);
        assert_eq!(value / Magnitude::THOUSAND, Magnitude::new(12));
        assert_eq!(value % Magnitude::THOUSAND, Magnitude::new(345));
        assert_eq!(value - Magnitude::new(345), Magnitude::new(12_000));
    }
}
