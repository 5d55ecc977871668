use serde::{Deserialize, Serialize};

use crate::parsing::ParseError;

/// ISO currency code attached to a user and their money values.
///
/// The set is fixed: a code outside it is rejected when the user sets it, so
/// everything downstream can treat the currency as total. Display symbols are
/// looked up from the variant, never from user input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 7] = [
        Currency::Inr,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
    ];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    /// Display symbol, prefixed to formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    /// Human name shown when listing supported currencies.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Currency::Inr => "Indian Rupee (₹)",
            Currency::Usd => "US Dollar ($)",
            Currency::Eur => "Euro (€)",
            Currency::Gbp => "British Pound (£)",
            Currency::Jpy => "Japanese Yen (¥)",
            Currency::Cad => "Canadian Dollar (C$)",
            Currency::Aud => "Australian Dollar (A$)",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "CAD" => Ok(Currency::Cad),
            "AUD" => Ok(Currency::Aud),
            other => Err(ParseError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(Currency::try_from(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Currency::try_from("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::try_from(" eur ").unwrap(), Currency::Eur);
    }

    #[test]
    fn unknown_code_is_carried_in_the_error() {
        let err = Currency::try_from("xbt").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedCurrency(code) if code == "XBT"));
    }

    #[test]
    fn default_is_inr() {
        assert_eq!(Currency::default(), Currency::Inr);
    }
}
