//! Discrete monetary values and their scales.

use exactly_shared::{Currency, MoneyError, MoneyResult, Unit};
use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::dense::Dense;
use crate::rational::Rational;

/// The ratio between a chosen unit and a currency's main unit.
///
/// `ratio` counts units per main unit: a euro cent scale has ratio `100`,
/// a 5-rappen scale on CHF has ratio `20`. The ratio is always positive.
///
/// ```
/// use exactly_core::{Rational, Scale};
///
/// let eur_cent = Scale::new("EUR".into(), "cent".into(), Rational::nat(100)).unwrap();
/// let xau_gram = Scale::new(
///     "XAU".into(),
///     "gram".into(),
///     Rational::from_decimal("31.103477").unwrap(),
/// )
/// .unwrap();
/// # let _ = (eur_cent, xau_gram);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScaleRepr")]
pub struct Scale {
    currency: Currency,
    unit: Unit,
    ratio: Rational,
}

#[derive(Deserialize)]
struct ScaleRepr {
    currency: Currency,
    unit: Unit,
    ratio: Rational,
}

impl TryFrom<ScaleRepr> for Scale {
    type Error = MoneyError;

    fn try_from(repr: ScaleRepr) -> Result<Self, Self::Error> {
        Self::new(repr.currency, repr.unit, repr.ratio)
    }
}

impl Scale {
    /// Creates a scale.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] unless `ratio` is strictly positive.
    pub fn new(currency: Currency, unit: Unit, ratio: Rational) -> MoneyResult<Self> {
        if !ratio.is_positive() {
            return Err(MoneyError::InvalidArgument(format!(
                "scale ratio must be positive, got {ratio}"
            )));
        }
        Ok(Self {
            currency,
            unit,
            ratio,
        })
    }

    /// The currency tag.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The unit tag.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Units per main currency unit.
    #[must_use]
    pub const fn ratio(&self) -> &Rational {
        &self.ratio
    }

    /// The main-unit amount of a single unit, `1 / ratio`.
    #[must_use]
    pub fn step(&self) -> Rational {
        Rational::one().div_nonzero(&self.ratio)
    }

    fn ensure_compatible(&self, other: &Self) -> MoneyResult<()> {
        self.currency.ensure_same(&other.currency)?;
        self.unit.ensure_same(&other.unit)
    }
}

/// An exact integer count of a unit.
///
/// Two discrete values combine only when both currency and unit match.
///
/// ```
/// use exactly_core::{Discrete, Rational, Scale};
///
/// let cent = Scale::new("EUR".into(), "cent".into(), Rational::nat(100)).unwrap();
/// let euro = Scale::new("EUR".into(), "euro".into(), Rational::nat(1)).unwrap();
///
/// assert!(Discrete::new(42, cent).add(&Discrete::new(23, euro)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    value: BigInt,
    scale: Scale,
}

impl Discrete {
    /// Creates a discrete value of `value` units.
    pub fn new(value: impl Into<BigInt>, scale: Scale) -> Self {
        Self {
            value: value.into(),
            scale,
        }
    }

    /// Zero units.
    #[must_use]
    pub fn zero(scale: Scale) -> Self {
        Self::new(0, scale)
    }

    /// The unit count.
    #[must_use]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// The scale.
    #[must_use]
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Adds a value of the same currency and unit.
    pub fn add(&self, that: &Self) -> MoneyResult<Self> {
        self.scale.ensure_compatible(&that.scale)?;
        Ok(Self::new(&self.value + &that.value, self.scale.clone()))
    }

    /// Subtracts a value of the same currency and unit.
    pub fn sub(&self, that: &Self) -> MoneyResult<Self> {
        self.scale.ensure_compatible(&that.scale)?;
        Ok(Self::new(&self.value - &that.value, self.scale.clone()))
    }

    /// Multiplies the count by an integer.
    pub fn mul(&self, x: impl Into<BigInt>) -> Self {
        let x: BigInt = x.into();
        Self::new(&self.value * x, self.scale.clone())
    }

    /// One unit more.
    #[must_use]
    pub fn increment(&self) -> Self {
        Self::new(&self.value + BigInt::one(), self.scale.clone())
    }

    /// One unit less.
    #[must_use]
    pub fn decrement(&self) -> Self {
        Self::new(&self.value - BigInt::one(), self.scale.clone())
    }

    /// The same count with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-&self.value, self.scale.clone())
    }

    /// Converts the count back to a main-unit amount: `value / ratio`.
    #[must_use]
    pub fn dense(&self) -> Dense {
        Dense::new(
            Rational::nat(self.value.clone()).div_nonzero(&self.scale.ratio),
            self.scale.currency.clone(),
        )
    }
}

impl std::fmt::Display for Discrete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.value, self.scale.unit, self.scale.currency)
    }
}
