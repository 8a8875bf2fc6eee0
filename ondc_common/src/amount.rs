use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::op;

//--------------------------------------       Amount        ---------------------------------------------------------
/// A currency amount, stored as an integer number of hundredths (paise, cents, ...).
///
/// ONDC documents carry every price as a decimal string with exactly two decimal places. `Amount` parses those
/// strings, does all the arithmetic in integers, and renders them back in the same format via [`Display`].
///
/// The arithmetic operators saturate at the bounds of `i64`. Use [`Amount::checked_add`] and [`Amount::checked_mul`]
/// where an overflow has to be detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

op!(binary Amount, Add, add, saturating_add);
op!(binary Amount, Sub, sub, saturating_sub);
op!(inplace Amount, AddAssign, add_assign, saturating_add);
op!(inplace Amount, SubAssign, sub_assign, saturating_sub);
op!(unary Amount, Neg, neg, saturating_neg);

impl Mul<i64> for Amount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl From<i64> for Amount {
    fn from(hundredths: i64) -> Self {
        Self(hundredths)
    }
}

impl Amount {
    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    pub fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.0.checked_mul(rhs).map(Self)
    }

    /// The raw value, in hundredths of a currency unit.
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `pct` of this amount, rounded half away from zero to the nearest hundredth.
    pub fn percentage(&self, pct: Percentage) -> Self {
        let magnitude = (i128::from(self.0.unsigned_abs()) * i128::from(pct.basis_points()) + 5_000) / 10_000;
        let magnitude = i64::try_from(magnitude).unwrap_or(i64::MAX);
        if self.0 < 0 {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, 2).map(Self).ok_or_else(|| AmountParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not a valid decimal value: '{0}'")]
pub struct AmountParseError(pub String);

//--------------------------------------     Percentage      ---------------------------------------------------------
/// A non-negative percentage with two decimal places of precision, stored in basis points (1% = 100bp).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u32);

impl Percentage {
    pub fn from_basis_points(bp: u32) -> Self {
        Self(bp)
    }

    pub fn from_percent(pct: u32) -> Self {
        Self(pct * 100)
    }

    pub fn basis_points(&self) -> u32 {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 100;
        match self.0 % 100 {
            0 => write!(f, "{whole}"),
            frac if frac % 10 == 0 => write!(f, "{whole}.{}", frac / 10),
            frac => write!(f, "{whole}.{frac:02}"),
        }
    }
}

impl FromStr for Percentage {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('%');
        parse_decimal(s, 2)
            .and_then(|bp| u32::try_from(bp).ok())
            .map(Self)
            .ok_or_else(|| AmountParseError(s.to_string()))
    }
}

/// Parses a plain decimal string into an integer scaled by `10^places`. Extra fractional digits are rounded half-up.
fn parse_decimal(value: &str, places: usize) -> Option<i64> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole = if whole.is_empty() { 0 } else { whole.parse::<i64>().ok()? };
    let mut fraction = frac.bytes().take(places).fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    for _ in frac.len()..places {
        fraction *= 10;
    }
    if frac.as_bytes().get(places).is_some_and(|b| *b >= b'5') {
        fraction += 1;
    }
    let scale = 10i64.checked_pow(u32::try_from(places).ok()?)?;
    let magnitude = whole.checked_mul(scale)?.checked_add(fraction)?;
    Some(if negative { -magnitude } else { magnitude })
}
