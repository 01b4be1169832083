//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored in the currency's standard unit (dollars, not cents)
//! as a [`rust_decimal::Decimal`], so totals stay exact no matter how many
//! purchases accumulate.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Add another price, keeping this price's currency.
    ///
    /// The demo catalog is single-currency; mixed-currency sums are a
    /// caller bug and only checked in debug builds.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        debug_assert_eq!(self.currency_code, other.currency_code);
        Self::new(self.amount + other.amount, self.currency_code)
    }
}

impl fmt::Display for Price {
    /// Format for display with two decimal places (e.g., `$999.00`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency symbol used when displaying prices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(amount: i64) -> Price {
        Price::new(Decimal::from(amount), CurrencyCode::USD)
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(usd(999).to_string(), "$999.00");
        assert_eq!(
            Price::new(Decimal::new(2495, 1), CurrencyCode::USD).to_string(),
            "$249.50"
        );
    }

    #[test]
    fn test_display_non_dollar_symbol() {
        let price = Price::new(Decimal::from(39), CurrencyCode::EUR);
        assert_eq!(price.to_string(), "\u{20ac}39.00");
    }

    #[test]
    fn test_plus_accumulates_exactly() {
        let total = Price::zero(CurrencyCode::USD)
            .plus(usd(999))
            .plus(usd(249));
        assert_eq!(total.amount, Decimal::from(1248));
    }

    #[test]
    fn test_currency_symbols_and_codes() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price: Price =
            serde_json::from_str(r#"{"amount":"999","currency_code":"USD"}"#).unwrap();
        assert_eq!(price, usd(999));
    }
}
