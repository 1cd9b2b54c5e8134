//! Decimal money amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the app quotes prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Accessory store prices.
    #[default]
    Usd,
    /// Subscription plan prices.
    Ngn,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Ngn => "₦",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ngn => "NGN",
        }
    }
}

/// An amount in a currency's standard unit (dollars, not cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Price {
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Whole-unit amount in US dollars.
    #[must_use]
    pub fn usd(whole: i64) -> Self {
        Self::new(Decimal::from(whole), Currency::Usd)
    }

    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Multiplies by `factor`, rounding to cents.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self::new((self.amount * factor).round_dp(2), self.currency)
    }

    /// Adds two prices in the same currency; `None` on a currency mismatch.
    pub fn checked_add(&self, other: &Price) -> Option<Price> {
        (self.currency == other.currency)
            .then(|| Price::new(self.amount + other.amount, self.currency))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
    }
}
