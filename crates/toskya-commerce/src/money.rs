//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so cart totals never drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    ARS,
    USD,
    EUR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "ARS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol shown in prices and order messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ARS | Currency::USD | Currency::MXN => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ARS" => Some(Currency::ARS),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents. Every supported currency has two decimal
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use toskya_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(8300.0, Currency::ARS);
    /// assert_eq!(price.amount_cents, 830_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format as a display string with exactly two decimals (e.g., "$7500.00").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            abs / 100,
            abs % 100
        )
    }

    /// Add another amount, saturating at the i64 bounds.
    ///
    /// The currency of `self` is kept.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by an integer factor, saturating at the i64 bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Scale by a factor expressed in hundredths (113 means ×1.13).
    ///
    /// Rounds half away from zero to the nearest cent.
    pub fn scale_hundredths(&self, hundredths: u32) -> Money {
        let product = self.amount_cents as i128 * hundredths as i128;
        let rounded = if product >= 0 {
            (product + 50) / 100
        } else {
            (product - 50) / 100
        };
        let clamped = rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        Money::new(clamped, self.currency)
    }

    /// Sum amounts into `currency`, saturating at the i64 bounds.
    pub fn sum(amounts: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        amounts
            .into_iter()
            .fold(Money::zero(currency), |acc, m| acc.saturating_add(&m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
