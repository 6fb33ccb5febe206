//! Dense monetary values.

use exactly_shared::{Currency, DecimalFormat, MoneyResult};
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rational::Rational;

/// A continuous amount in a currency's main unit.
///
/// Values in different currencies never combine: [`add`](Self::add) and
/// [`sub`](Self::sub) fail with `CurrencyMismatch` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dense {
    value: Rational,
    currency: Currency,
}

impl Dense {
    /// Creates a dense value.
    #[must_use]
    pub const fn new(value: Rational, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Parses a decimal string such as `"13.37"`.
    pub fn from_decimal(s: &str, currency: Currency) -> MoneyResult<Self> {
        Ok(Self::new(Rational::from_decimal(s)?, currency))
    }

    /// Creates a whole amount.
    pub fn nat(n: impl Into<BigInt>, currency: Currency) -> Self {
        Self::new(Rational::nat(n), currency)
    }

    /// Creates an exact amount from a `rust_decimal::Decimal`.
    #[must_use]
    pub fn from_decimal_value(d: Decimal, currency: Currency) -> Self {
        Self::new(Rational::from(d), currency)
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Rational::zero(), currency)
    }

    /// The amount.
    #[must_use]
    pub const fn value(&self) -> &Rational {
        &self.value
    }

    /// The currency tag.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Adds a value in the same currency.
    pub fn add(&self, that: &Self) -> MoneyResult<Self> {
        self.currency.ensure_same(&that.currency)?;
        Ok(Self::new(&self.value + &that.value, self.currency.clone()))
    }

    /// Subtracts a value in the same currency.
    pub fn sub(&self, that: &Self) -> MoneyResult<Self> {
        self.currency.ensure_same(&that.currency)?;
        Ok(Self::new(&self.value - &that.value, self.currency.clone()))
    }

    /// Scales by a currency-agnostic factor such as a tax rate.
    #[must_use]
    pub fn mul(&self, x: &Rational) -> Self {
        Self::new(&self.value * x, self.currency.clone())
    }

    /// Divides by a currency-agnostic factor.
    pub fn div(&self, x: &Rational) -> MoneyResult<Self> {
        Ok(Self::new(self.value.checked_div(x)?, self.currency.clone()))
    }

    /// The same amount with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.value.negate(), self.currency.clone())
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Decimal string with the default format.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.value.to_string()
    }

    /// Decimal string with an explicit format.
    #[must_use]
    pub fn to_decimal_with(&self, format: &DecimalFormat) -> String {
        self.value.to_decimal(format)
    }

    /// Lossy float approximation; see [`Rational::to_f64`].
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }
}

impl std::fmt::Display for Dense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
