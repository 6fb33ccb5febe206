//! Exact money arithmetic for Exactly.
//!
//! This crate contains pure arithmetic with ZERO floating point and ZERO I/O.
//! Money is an arbitrary precision rational tagged with a currency, and every
//! conversion to whole units reports its leftover exactly.
//!
//! # Modules
//!
//! - `rational` - Unreduced arbitrary precision fractions
//! - `dense` - Continuous amounts in a currency's main unit
//! - `discrete` - Integer counts of a unit, and the scales defining units
//! - `money` - Exchange rates and floor / ceil / round with remainders
//!
//! ```
//! use exactly_core::{Dense, Rational, Scale, money};
//!
//! let cent = Scale::new("EUR".into(), "cent".into(), Rational::nat(100)).unwrap();
//! let price = Dense::from_decimal("1.337", "EUR".into()).unwrap();
//!
//! let (cents, rest) = money::floor(&price, &cent).unwrap().into_parts();
//! assert_eq!(cents.to_string(), "133 cent (EUR)");
//! assert_eq!(rest.to_decimal(), "0.007");
//! ```

pub mod dense;
pub mod discrete;
pub mod money;
pub mod rational;

pub use dense::Dense;
pub use discrete::{Discrete, Scale};
pub use exactly_shared::{Currency, DecimalFormat, MoneyError, MoneyResult, Unit};
pub use money::{ExchangeRate, RoundingMode, Split};
pub use rational::Rational;
