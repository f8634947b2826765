//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues in running sums. On the wire (the store file) an amount is a plain
//! JSON decimal number, e.g. `42.5`, so serialization converts at the boundary.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TrackerError;

/// Largest magnitude (in cents) that survives the f64 round-trip exactly (2^53)
const MAX_CENTS: i64 = 9_007_199_254_740_992;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendtrack::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in currency units (e.g. dollars), as written to the store file
    pub fn to_unit(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "42.50", "-42.50", "$42.50", "42". At most two
    /// fractional digits are allowed.
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() {
            return Err(TrackerError::Format(format!("Invalid amount: '{}'", s)));
        }

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                if frac.is_empty() || frac.len() > 2 {
                    return Err(TrackerError::Format(format!("Invalid amount: '{}'", s)));
                }
                let units: i64 = whole
                    .parse()
                    .map_err(|_| TrackerError::Format(format!("Invalid amount: '{}'", s)))?;
                let frac_cents: i64 = frac
                    .parse()
                    .map_err(|_| TrackerError::Format(format!("Invalid amount: '{}'", s)))?;
                let frac_cents = if frac.len() == 1 { frac_cents * 10 } else { frac_cents };
                units * 100 + frac_cents
            }
            None => {
                rest.parse::<i64>()
                    .map_err(|_| TrackerError::Format(format!("Invalid amount: '{}'", s)))?
                    * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.0.abs() / 100, self.0.abs() % 100)
        } else {
            format!("{}{}.{:02}", symbol, self.0 / 100, self.0 % 100)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// The store file keeps amounts as decimal numbers ("amount": 42.5), so Money
// crosses the serde boundary as f64 rather than as raw cents.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_unit())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return Err(serde::de::Error::custom("amount out of range"));
        }
        Ok(Money(cents as i64))
    }
}
