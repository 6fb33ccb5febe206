//! Exchange rate types and logic.

use exactly_shared::{Currency, MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

use crate::dense::Dense;
use crate::rational::Rational;

/// Exchange rate between two currencies.
///
/// The inverse is never derived implicitly; call [`inverse`](Self::inverse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExchangeRateRepr")]
pub struct ExchangeRate {
    src: Currency,
    dst: Currency,
    ratio: Rational,
}

#[derive(Deserialize)]
struct ExchangeRateRepr {
    src: Currency,
    dst: Currency,
    ratio: Rational,
}

impl TryFrom<ExchangeRateRepr> for ExchangeRate {
    type Error = MoneyError;

    fn try_from(repr: ExchangeRateRepr) -> Result<Self, Self::Error> {
        Self::new(repr.src, repr.dst, repr.ratio)
    }
}

impl ExchangeRate {
    /// Creates a rate: 1 `src` = `ratio` `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `ratio` is zero.
    pub fn new(src: Currency, dst: Currency, ratio: Rational) -> MoneyResult<Self> {
        if ratio.is_zero() {
            return Err(MoneyError::InvalidArgument(
                "exchange rate ratio cannot be 0".to_string(),
            ));
        }
        Ok(Self { src, dst, ratio })
    }

    /// Source currency.
    #[must_use]
    pub const fn src(&self) -> &Currency {
        &self.src
    }

    /// Target currency.
    #[must_use]
    pub const fn dst(&self) -> &Currency {
        &self.dst
    }

    /// Factor applied to a source amount.
    #[must_use]
    pub const fn ratio(&self) -> &Rational {
        &self.ratio
    }

    /// Returns the rate converting `dst` back into `src`.
    pub fn inverse(&self) -> MoneyResult<Self> {
        Ok(Self {
            src: self.dst.clone(),
            dst: self.src.clone(),
            ratio: self.ratio.inverse()?,
        })
    }

    /// Converts a source amount into the target currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if `value` is not in `src`.
    pub fn apply(&self, value: &Dense) -> MoneyResult<Dense> {
        self.src.ensure_same(value.currency())?;
        Ok(Dense::new(value.value() * &self.ratio, self.dst.clone()))
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "1 {} = {} {}", self.src, self.ratio, self.dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur_to_usd() -> ExchangeRate {
        ExchangeRate::new(
            "EUR".into(),
            "USD".into(),
            Rational::from_decimal("1.12").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_apply() {
        let eur = Dense::from_decimal("10", "EUR".into()).unwrap();
        let usd = eur_to_usd().apply(&eur).unwrap();
        assert_eq!(usd.to_decimal(), "11.2");
        assert_eq!(usd.currency().as_str(), "USD");
    }

    #[test]
    fn test_apply_rejects_wrong_source() {
        let chf = Dense::nat(10, "CHF".into());
        assert_eq!(
            eur_to_usd().apply(&chf),
            Err(MoneyError::CurrencyMismatch {
                expected: "EUR".into(),
                found: "CHF".into(),
            })
        );
    }

    #[test]
    fn test_inverse_is_explicit() {
        let rate = eur_to_usd();
        let back = rate.inverse().unwrap();
        assert_eq!(back.src().as_str(), "USD");
        assert_eq!(back.dst().as_str(), "EUR");
        assert_eq!(back.ratio(), &Rational::new(100, 112).unwrap());

        let usd = Dense::from_decimal("11.2", "USD".into()).unwrap();
        assert_eq!(back.apply(&usd).unwrap().to_decimal(), "10.0");
    }

    #[test]
    fn test_zero_ratio_rejected() {
        let result = ExchangeRate::new("EUR".into(), "USD".into(), Rational::zero());
        assert!(matches!(result, Err(MoneyError::InvalidArgument(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(eur_to_usd().to_string(), "1 EUR = 1.12 USD");
    }

    #[test]
    fn test_serde_rejects_zero_ratio() {
        let mut json = serde_json::to_value(eur_to_usd()).unwrap();
        let back: ExchangeRate = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, eur_to_usd());

        json["ratio"] = serde_json::to_value(Rational::zero()).unwrap();
        assert!(serde_json::from_value::<ExchangeRate>(json).is_err());
    }
}
