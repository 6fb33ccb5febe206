//! Dense to discrete conversion with exact remainders.
//!
//! CRITICAL: every conversion returns the leftover amount, so that
//! `discrete.dense() + remainder == value` holds exactly. Nothing is lost.
//!
//! All three policies share one skeleton. The value is scaled into units,
//! split into a truncated magnitude and a leftover numerator, and the policy
//! only decides whether the magnitude moves one unit further from zero:
//! - `Floor` moves negative values (toward -inf)
//! - `Ceil` moves positive values (toward +inf)
//! - `HalfUp` moves when the leftover is at least half a unit (ties away from zero)

use exactly_shared::MoneyResult;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dense::Dense;
use crate::discrete::{Discrete, Scale};
use crate::rational::Rational;

/// Direction used when a dense value falls between two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// To the nearest unit, halves away from zero.
    HalfUp,
}

/// A discrete result together with the dense amount it did not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Whole units in the target scale.
    pub discrete: Discrete,
    /// Signed leftover in the input currency.
    pub remainder: Dense,
}

impl Split {
    /// Returns `(discrete, remainder)`.
    #[must_use]
    pub fn into_parts(self) -> (Discrete, Dense) {
        (self.discrete, self.remainder)
    }
}

impl From<Split> for (Discrete, Dense) {
    fn from(split: Split) -> Self {
        split.into_parts()
    }
}

/// Converts `value` to whole units of `scale` using `mode`.
///
/// # Errors
///
/// Returns `CurrencyMismatch` if `value` is not in the scale's currency.
pub fn to_discrete(value: &Dense, scale: &Scale, mode: RoundingMode) -> MoneyResult<Split> {
    scale.currency().ensure_same(value.currency())?;

    let (num, denom) = (value.value() * scale.ratio()).normalize().into_parts();
    let negative = num.is_negative();
    let (whole, rem) = num.abs().div_rem(&denom);

    let away_from_zero = !rem.is_zero()
        && match mode {
            RoundingMode::Floor => negative,
            RoundingMode::Ceil => !negative,
            RoundingMode::HalfUp => &rem * BigInt::from(2) >= denom,
        };

    trace!(
        ?mode,
        unit = %scale.unit(),
        numerator = %num,
        denominator = %denom,
        away_from_zero,
        "splitting dense value into units"
    );

    // |value| - whole units, in main units
    let leftover = Rational::from_parts(rem, denom).div_nonzero(scale.ratio());

    let (magnitude, remainder) = if away_from_zero {
        let shortfall = scale.step() - leftover;
        (whole + BigInt::one(), if negative { shortfall } else { -shortfall })
    } else {
        (whole, if negative { -leftover } else { leftover })
    };
    let count = if negative { -magnitude } else { magnitude };

    Ok(Split {
        discrete: Discrete::new(count, scale.clone()),
        remainder: Dense::new(remainder, value.currency().clone()),
    })
}

/// Floors `value` to the closest unit of `scale` below it.
pub fn floor(value: &Dense, scale: &Scale) -> MoneyResult<Split> {
    to_discrete(value, scale, RoundingMode::Floor)
}

/// Ceils `value` to the closest unit of `scale` above it.
pub fn ceil(value: &Dense, scale: &Scale) -> MoneyResult<Split> {
    to_discrete(value, scale, RoundingMode::Ceil)
}

/// Rounds `value` to the nearest unit of `scale`, halves away from zero.
pub fn round(value: &Dense, scale: &Scale) -> MoneyResult<Split> {
    to_discrete(value, scale, RoundingMode::HalfUp)
}
