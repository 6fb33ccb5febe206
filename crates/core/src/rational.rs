//! Exact rational numbers.
//!
//! A [`Rational`] is an immutable numerator/denominator pair of arbitrary
//! precision integers. Arithmetic combines the parts directly by cross
//! multiplication and never reduces to lowest terms, so the same value may
//! have several representations. Equality and ordering compare by value.
//!
//! Denominators grow multiplicatively across chained operations. Callers
//! running long chains should call [`Rational::reduce`] themselves.
//!
//! ```
//! use exactly_core::Rational;
//!
//! let x = Rational::new(2, 3).unwrap();
//! assert_eq!((x * Rational::nat(3)).to_string(), "2.0");
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use exactly_shared::{DecimalFormat, MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An exact fraction `numerator / denominator` with a non-zero denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RationalRepr")]
pub struct Rational {
    #[serde(rename = "numerator")]
    numer: BigInt,
    #[serde(rename = "denominator")]
    denom: BigInt,
}

/// Wire shape, validated before it becomes a [`Rational`].
#[derive(Deserialize)]
struct RationalRepr {
    numerator: BigInt,
    denominator: BigInt,
}

impl TryFrom<RationalRepr> for Rational {
    type Error = MoneyError;

    fn try_from(repr: RationalRepr) -> Result<Self, Self::Error> {
        Self::new(repr.numerator, repr.denominator)
    }
}

impl Rational {
    /// Creates `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> MoneyResult<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(MoneyError::InvalidArgument(
                "denominator cannot be 0".to_string(),
            ));
        }
        Ok(Self {
            numer: numer.into(),
            denom,
        })
    }

    /// Creates `n / 1`.
    pub fn nat(n: impl Into<BigInt>) -> Self {
        Self {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    /// Zero as `0 / 1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::nat(0)
    }

    /// One as `1 / 1`.
    #[must_use]
    pub fn one() -> Self {
        Self::nat(1)
    }

    /// Builds a rational from parts the caller already knows to be valid.
    pub(crate) fn from_parts(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero(), "denominator cannot be 0");
        Self { numer, denom }
    }

    /// Parses `[-]INT[.FRAC]` into `n / 10^len(FRAC)`.
    ///
    /// An empty integral part reads as zero, so `".5"` is one half. The
    /// fraction keeps its written precision: `"0.50"` becomes `50 / 100`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Parse`] for empty input, a lone sign, more than
    /// one decimal point, or any character other than ASCII digits.
    ///
    /// ```
    /// use exactly_core::Rational;
    ///
    /// let x = Rational::from_decimal("13.37").unwrap();
    /// assert_eq!(x, Rational::new(1337, 100).unwrap());
    /// ```
    pub fn from_decimal(s: &str) -> MoneyResult<Self> {
        let (negative, abs) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut parts = abs.split('.');
        let integral = parts.next().unwrap_or_default();
        let fractional = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(MoneyError::parse(s, "more than one decimal point"));
        }
        if integral.is_empty() && fractional.is_empty() {
            return Err(MoneyError::parse(s, "no digits"));
        }
        if !integral.bytes().chain(fractional.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::parse(s, "expected only digits and one '.'"));
        }

        let mag = u32::try_from(fractional.len())
            .map_err(|_| MoneyError::parse(s, "too many fractional digits"))?;
        let denom = BigInt::from(10).pow(mag);
        let whole = parse_digits(integral, s)?;
        let frac = parse_digits(fractional, s)?;

        let abs_num = whole * &denom + frac;
        let numer = if negative { -abs_num } else { abs_num };
        Ok(Self { numer, denom })
    }

    /// The numerator as stored.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator as stored. May be negative until [`normalize`](Self::normalize)d.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Consumes the rational, returning `(numerator, denominator)`.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.numer.is_zero() && (self.numer.is_negative() != self.denom.is_negative())
    }

    /// Returns true if the value is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.numer.is_zero() && !self.is_negative()
    }

    /// Multiplies by `-1 / 1`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self * &Self::nat(-1)
    }

    /// The absolute value, with a positive denominator.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.abs(),
        }
    }

    /// Divides by `that`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `that` is zero.
    pub fn checked_div(&self, that: &Self) -> MoneyResult<Self> {
        if that.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.div_nonzero(that))
    }

    /// Divides by a divisor known to be non-zero, such as a scale ratio.
    pub(crate) fn div_nonzero(&self, that: &Self) -> Self {
        Self::from_parts(&self.numer * &that.denom, &self.denom * &that.numer)
    }

    /// Swaps numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if the value is zero.
    pub fn inverse(&self) -> MoneyResult<Self> {
        if self.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::from_parts(self.denom.clone(), self.numer.clone()))
    }

    /// Moves the sign onto the numerator so the denominator is positive.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.denom.is_negative() {
            Self::from_parts(-&self.numer, -&self.denom)
        } else {
            self.clone()
        }
    }

    /// Reduces to lowest terms with a positive denominator.
    ///
    /// Never applied implicitly.
    #[must_use]
    pub fn reduce(&self) -> Self {
        if self.numer.is_zero() {
            return Self::zero();
        }
        let g = self.numer.gcd(&self.denom);
        Self::from_parts(&self.numer / &g, &self.denom / &g).normalize()
    }

    /// Formats the value as a decimal string by long division.
    ///
    /// Generation stops as soon as the division terminates, so there are no
    /// trailing zeros beyond those inside the expansion, but at least one
    /// fractional digit is always written (`1` renders as `"1.0"`).
    ///
    /// With `round` set, the digit after the last one kept decides a half-up
    /// carry, which may ripple into the integral part (`0.995` at two places
    /// renders as `"1.0"`). A value that renders as zero carries no sign.
    ///
    /// ```
    /// use exactly_core::Rational;
    /// use exactly_shared::DecimalFormat;
    ///
    /// let third = Rational::new(1, 3).unwrap();
    /// assert_eq!(third.to_decimal(&DecimalFormat::default().with_decimals(4)), "0.3333");
    /// ```
    #[must_use]
    pub fn to_decimal(&self, format: &DecimalFormat) -> String {
        let (num, denom) = self.normalize().into_parts();
        let negative = num.is_negative();
        let (mut integral, rem) = num.abs().div_rem(&denom);

        let mut digits: Vec<u8> = Vec::new();
        let ten = BigInt::from(10);
        let mut rem: BigInt = rem * &ten;
        while !rem.is_zero() && digits.len() < format.decimals {
            let (digit, next) = rem.div_rem(&denom);
            // long division digits are always 0..=9
            digits.push(digit.to_u8().unwrap_or_default());
            rem = next * &ten;
        }

        if format.round && !rem.is_zero() && &rem / &denom >= BigInt::from(5) {
            loop {
                match digits.pop() {
                    Some(9) => {}
                    Some(d) => {
                        digits.push(d + 1);
                        break;
                    }
                    None => {
                        integral += BigInt::one();
                        break;
                    }
                }
            }
        }

        let is_zero = integral.is_zero() && digits.iter().all(|d| *d == 0);
        let sign = if negative && !is_zero { "-" } else { "" };
        let fractional: String = if digits.is_empty() {
            "0".to_string()
        } else {
            digits.iter().map(|d| char::from(b'0' + d)).collect()
        };

        format!("{sign}{integral}{}{fractional}", format.separator)
    }

    /// Lossy floating point approximation of [`to_decimal`](Self::to_decimal).
    ///
    /// For display and interop only. Never feed the result back into money
    /// arithmetic.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Debug rendering `"n / d"` of the parts as stored.
    #[must_use]
    pub fn to_fraction_string(&self) -> String {
        format!("{} / {}", self.numer, self.denom)
    }
}

fn parse_digits(digits: &str, input: &str) -> MoneyResult<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    digits
        .parse::<BigInt>()
        .map_err(|e| MoneyError::parse(input, e.to_string()))
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.normalize();
        let b = other.normalize();
        (&a.numer * &b.denom).cmp(&(&b.numer * &a.denom))
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal(&DecimalFormat::default()))
    }
}

impl FromStr for Rational {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::nat(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::nat(n)
    }
}

impl From<Decimal> for Rational {
    /// Exact: `mantissa / 10^scale`.
    fn from(d: Decimal) -> Self {
        Self::from_parts(BigInt::from(d.mantissa()), BigInt::from(10).pow(d.scale()))
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::from_parts(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::from_parts(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::from_parts(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
