//! Exchange and rounding between dense and discrete values.

pub mod exchange;
pub mod rounding;

#[cfg(test)]
mod rounding_props;

use exactly_shared::{Currency, MoneyResult};

use crate::dense::Dense;
use crate::rational::Rational;

pub use exchange::ExchangeRate;
pub use rounding::{RoundingMode, Split, ceil, floor, round, to_discrete};

/// Creates an exchange rate: 1 `src` = `ratio` `dst`.
pub fn exchange_rate(src: Currency, dst: Currency, ratio: Rational) -> MoneyResult<ExchangeRate> {
    ExchangeRate::new(src, dst, ratio)
}

/// Converts a dense value with `rate`. Fails if `value` is not in the rate's source currency.
pub fn exchange(rate: &ExchangeRate, value: &Dense) -> MoneyResult<Dense> {
    rate.apply(value)
}
