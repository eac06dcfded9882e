//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount.
///
/// Asset values arrive from data entry as loosely formatted text
/// (`"Rs. 1,20,000"`, `"45000/-"`, `"12,500.50"`). They are normalized once
/// here and every calculation downstream works on the clean `Decimal`.
///
/// Deserialized amounts go through [`Money::new`], so a stored negative
/// value never bypasses the sign rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a Money value, discarding any sign.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.abs(),
        }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Normalizes free-form text into an amount.
    ///
    /// Every character other than ASCII digits and the first `.` is dropped,
    /// so grouping separators, currency symbols and signs never reach the
    /// parser. Text without digits, or too large for `Decimal`, becomes zero.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let mut cleaned = String::with_capacity(raw.len());
        let mut seen_point = false;
        for ch in raw.chars() {
            if ch.is_ascii_digit() {
                cleaned.push(ch);
            } else if ch == '.' && !seen_point {
                seen_point = true;
                cleaned.push(ch);
            }
        }

        if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
            return Self::zero();
        }

        Decimal::from_str(&cleaned).map_or_else(|_| Self::zero(), Self::new)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.amount
    }
}

/// Saturates at `Decimal::MAX` instead of panicking.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount.normalize())
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
