//! Exact currency values.
//!
//! The YNAB API reports every amount as an integer count of milliunits
//! (1000 milliunits = 1.00). Amounts are kept as a scale-3 `Decimal` so that
//! conversion and summation never pick up binary floating-point error.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const MILLIUNIT_SCALE: u32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Balance = Balance(Decimal::ZERO);

    /// Converts a raw milliunit amount. `Balance::from_milliunits(-1500)` is `-1.500`.
    pub fn from_milliunits(milliunits: i64) -> Self {
        Self(Decimal::new(milliunits, MILLIUNIT_SCALE))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Balance {
        Balance(self.0 + rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Balance) {
        self.0 += rhs.0;
    }
}

impl Sub for Balance {
    type Output = Balance;

    fn sub(self, rhs: Balance) -> Balance {
        Balance(self.0 - rhs.0)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Balance) {
        self.0 -= rhs.0;
    }
}

impl Neg for Balance {
    type Output = Balance;

    fn neg(self) -> Balance {
        Balance(-self.0)
    }
}

impl Sum for Balance {
    fn sum<I: Iterator<Item = Balance>>(iter: I) -> Balance {
        iter.fold(Balance::ZERO, |acc, b| acc + b)
    }
}

impl<'a> Sum<&'a Balance> for Balance {
    fn sum<I: Iterator<Item = &'a Balance>>(iter: I) -> Balance {
        iter.copied().sum()
    }
}

/// Renders `$1,234.57` / `-$1,234.57`. The minus sign goes in front of the
/// currency symbol and follows the unrounded value, so `-0.001` is `-$0.00`.
/// Half cents round away from zero.
impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = self.0.is_sign_negative() && !self.0.is_zero();
        let plain = format!("{:.2}", rounded.abs());
        let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let sign = if negative { "-" } else { "" };
        write!(f, "{sign}${}.{cents}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn converts_milliunits_exactly() {
        assert_eq!(
            Balance::from_milliunits(1_000_000).as_decimal(),
            Decimal::from(1000)
        );
        assert_eq!(
            Balance::from_milliunits(-1500).as_decimal(),
            Decimal::from_str("-1.5").unwrap()
        );
        assert_eq!(
            Balance::from_milliunits(1).as_decimal(),
            Decimal::from_str("0.001").unwrap()
        );
    }

    #[test]
    fn float_view_matches_plain_division() {
        for n in [0_i64, 1500, -1500, 2500, 1_000_000, -200_000_000] {
            assert_eq!(Balance::from_milliunits(n).to_f64(), n as f64 / 1000.0);
        }
    }

    #[test]
    fn summing_converted_values_does_not_drift() {
        // 0.1 + 0.2 style values that drift as f64.
        let raw: Vec<i64> = (0..1000).map(|i| 100 + (i % 7) * 10 + 3).collect();
        let summed: Balance = raw.iter().map(|n| Balance::from_milliunits(*n)).sum();
        let once = Balance::from_milliunits(raw.iter().sum());
        assert_eq!(summed, once);
    }

    #[test]
    fn repeated_conversion_is_identical() {
        let a = Balance::from_milliunits(123_456_789);
        let b = Balance::from_milliunits(123_456_789);
        assert_eq!(a, b);
        assert_eq!(a.as_decimal().serialize(), b.as_decimal().serialize());
    }

    #[test]
    fn arithmetic_behaves_like_decimals() {
        let a = Balance::from_milliunits(50_000);
        let b = Balance::from_milliunits(-30_000);
        assert_eq!(a + b, Balance::from_milliunits(20_000));
        assert_eq!(a - b, Balance::from_milliunits(80_000));
        assert_eq!(-a, Balance::from_milliunits(-50_000));

        let mut c = a;
        c += b;
        c -= Balance::from_milliunits(1);
        assert_eq!(c, Balance::from_milliunits(19_999));
    }

    #[test]
    fn display_places_sign_before_symbol() {
        assert_eq!(Balance::from_milliunits(-1500).to_string(), "-$1.50");
        assert_eq!(Balance::from_milliunits(1_000_000).to_string(), "$1,000.00");
        assert_eq!(Balance::ZERO.to_string(), "$0.00");
        assert_eq!(
            Balance::from_milliunits(-200_000_000).to_string(),
            "-$200,000.00"
        );
        assert_eq!(
            Balance::from_milliunits(1_234_567_891).to_string(),
            "$1,234,567.89"
        );
        assert_eq!(Balance::from_milliunits(999_990).to_string(), "$999.99");
    }

    #[test]
    fn display_rounds_half_cents_away_from_zero() {
        assert_eq!(Balance::from_milliunits(1236).to_string(), "$1.24");
        assert_eq!(Balance::from_milliunits(1245).to_string(), "$1.25");
        assert_eq!(Balance::from_milliunits(5).to_string(), "$0.01");
        assert_eq!(Balance::from_milliunits(-1245).to_string(), "-$1.25");
    }

    #[test]
    fn display_sign_follows_unrounded_value() {
        assert_eq!(Balance::from_milliunits(-1).to_string(), "-$0.00");
        assert_eq!(Balance::from_milliunits(-4).to_string(), "-$0.00");
        assert_eq!(Balance::from_milliunits(4).to_string(), "$0.00");
        assert_eq!((-Balance::ZERO).to_string(), "$0.00");
    }
}
