//! Currency-agnostic amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative amount held in minor units (hundredths of the display unit).
///
/// The type carries no currency. Rendering a symbol or locale-specific digit
/// grouping is left to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates an amount from whole major units.
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Whole major units, truncating the fractional part.
    pub const fn major(self) -> u64 {
        self.0 / 100
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a line quantity, saturating instead of wrapping.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_major(99_999).to_string(), "99999.00");
        assert_eq!(Money::from_minor(1_205).to_string(), "12.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_times_and_sum_saturate() {
        let price = Money::from_major(14_999);
        assert_eq!(price.times(3), Money::from_major(44_997));
        assert_eq!(Money::from_minor(u64::MAX).times(2), Money::from_minor(u64::MAX));

        let total: Money = [Money::from_major(1), Money::from_minor(50)].into_iter().sum();
        assert_eq!(total, Money::from_minor(150));
    }
}
