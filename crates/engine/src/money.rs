use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use crate::{Currency, parsing::ParseError};

/// Money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (amounts, limits,
/// totals) to avoid floating-point drift. Percentages become floating point
/// only at evaluation/render time.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.format(Currency::Usd), "$12.34");
/// ```
///
/// Parsing from command input (plain decimal literal, at most 2 fraction
/// digits, no sign):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
/// assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// assert!("-3".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Renders the amount with the currency symbol prefixed and exactly two
    /// fraction digits. Total: every supported currency has a symbol, so
    /// display can never block an operation.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{sign}{symbol}{units}.{cents:02}",
            symbol = currency.symbol(),
            units = abs / 100,
            cents = abs % 100
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = ParseError;

    /// Parses a decimal literal into cents.
    ///
    /// The command grammar owns sign and separator decisions, so this is
    /// strict: ASCII digits, `.` as the only separator, max 2 fractional
    /// digits, no sign prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidAmount);
        }

        let (units_str, cents_str) = match trimmed.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (trimmed, None),
        };

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidAmount);
        }
        let units: i64 = units_str.parse().map_err(|_| ParseError::InvalidAmount)?;

        let cents: i64 = match cents_str {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ParseError::InvalidAmount);
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| ParseError::InvalidAmount)? * 10,
                    2 => frac.parse::<i64>().map_err(|_| ParseError::InvalidAmount)?,
                    _ => return Err(ParseError::InvalidAmount),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or(ParseError::InvalidAmount)?;

        Ok(Money(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_prefixes_symbol_with_two_digits() {
        assert_eq!(Money::new(0).format(Currency::Inr), "₹0.00");
        assert_eq!(Money::new(1).format(Currency::Inr), "₹0.01");
        assert_eq!(Money::new(15_000).format(Currency::Inr), "₹150.00");
        assert_eq!(Money::new(1050).format(Currency::Cad), "C$10.50");
        assert_eq!(Money::new(-1050).format(Currency::Eur), "-€10.50");
    }

    #[test]
    fn parse_accepts_integer_and_fraction() {
        assert_eq!("150".parse::<Money>().unwrap().cents(), 15_000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_signs_and_separator_variants() {
        assert!("-3".parse::<Money>().is_err());
        assert!("+3".parse::<Money>().is_err());
        assert!("3,50".parse::<Money>().is_err());
        assert!(".5".parse::<Money>().is_err());
        assert!("5.".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<Money>().is_err());
        assert!("0.001".parse::<Money>().is_err());
    }
}
