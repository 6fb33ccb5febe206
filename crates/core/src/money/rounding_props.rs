//! Property-based tests for dense to discrete conversion.
//!
//! - Reconstruction: `discrete.dense() + remainder == value` for every policy
//! - Remainder bounds per policy
//! - Discrete values survive a round trip through dense
//! - Floor of a negated value mirrors ceil
//! - Decimal strings survive parse and format

use proptest::prelude::*;

use super::rounding::{RoundingMode, ceil, floor, to_discrete};
use crate::dense::Dense;
use crate::discrete::{Discrete, Scale};
use crate::rational::Rational;

/// Strategy to generate rationals with either sign on either part.
fn any_rational() -> impl Strategy<Value = Rational> {
    (
        -1_000_000_000_000i64..1_000_000_000_000i64,
        prop_oneof![1i64..1_000_000, -1_000_000i64..-1],
    )
        .prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

/// Strategy to generate EUR scales with positive, not necessarily integral, ratios.
fn eur_scale() -> impl Strategy<Value = Scale> {
    (1i64..1_000, 1i64..100).prop_map(|(n, d)| {
        Scale::new("EUR".into(), "unit".into(), Rational::new(n, d).unwrap()).unwrap()
    })
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Floor),
        Just(RoundingMode::Ceil),
        Just(RoundingMode::HalfUp),
    ]
}

/// Strategy to generate well-formed decimal strings with up to 12 fractional digits.
fn decimal_string() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        0u64..1_000_000_000_000_000,
        prop::option::of("[0-9]{1,12}"),
    )
        .prop_map(|(negative, integral, fractional)| {
            let sign = if negative { "-" } else { "" };
            match fractional {
                Some(frac) => format!("{sign}{integral}.{frac}"),
                None => format!("{sign}{integral}"),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* value, scale and policy, the discrete part plus the
    /// remainder SHALL equal the input exactly.
    #[test]
    fn prop_reconstruction(
        value in any_rational(),
        scale in eur_scale(),
        mode in rounding_mode(),
    ) {
        let dense = Dense::new(value, "EUR".into());
        let split = to_discrete(&dense, &scale, mode).unwrap();
        let rebuilt = split.discrete.dense().add(&split.remainder).unwrap();
        prop_assert_eq!(rebuilt, dense);
    }

    /// *For any* value, the remainder SHALL lie within one unit in the
    /// direction the policy rounds, and within half a unit for HalfUp.
    #[test]
    fn prop_remainder_bounds(
        value in any_rational(),
        scale in eur_scale(),
        mode in rounding_mode(),
    ) {
        let dense = Dense::new(value, "EUR".into());
        let split = to_discrete(&dense, &scale, mode).unwrap();
        let rem = split.remainder.value().clone();
        let step = scale.step();
        match mode {
            RoundingMode::Floor => {
                prop_assert!(!rem.is_negative());
                prop_assert!(rem < step);
            }
            RoundingMode::Ceil => {
                prop_assert!(!rem.is_positive());
                prop_assert!(-rem < step);
            }
            RoundingMode::HalfUp => {
                prop_assert!(rem.abs() * Rational::nat(2) <= step);
            }
        }
    }

    /// *For any* discrete value, converting to dense and back SHALL return
    /// the same count with a zero remainder.
    #[test]
    fn prop_discrete_round_trip(
        count in any::<i64>(),
        scale in eur_scale(),
        mode in rounding_mode(),
    ) {
        let discrete = Discrete::new(count, scale.clone());
        let split = to_discrete(&discrete.dense(), &scale, mode).unwrap();
        prop_assert_eq!(split.discrete, discrete);
        prop_assert_eq!(split.remainder.to_decimal(), "0.0");
    }

    /// *For any* value, flooring its negation SHALL mirror ceiling it.
    #[test]
    fn prop_floor_mirrors_ceil(value in any_rational(), scale in eur_scale()) {
        let dense = Dense::new(value, "EUR".into());
        let up = ceil(&dense, &scale).unwrap();
        let down = floor(&dense.negate(), &scale).unwrap();
        prop_assert_eq!(down.discrete, up.discrete.negate());
        prop_assert_eq!(down.remainder, up.remainder.negate());
    }

    /// *For any* decimal string within the default precision, parsing the
    /// formatted value SHALL give back the same number.
    #[test]
    fn prop_decimal_parse_format_inverse(s in decimal_string()) {
        let parsed = Rational::from_decimal(&s).unwrap();
        let reparsed = Rational::from_decimal(&parsed.to_string()).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }
}
