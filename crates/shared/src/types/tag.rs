//! Currency and unit tags.
//!
//! Tags are opaque identifiers. They gate which values may be combined and
//! are never interpreted: there is no currency table and no symbol lookup.
//! Comparison is exact and case-sensitive. Every string is a valid tag,
//! whichever constructor builds it.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// Identifies a currency, e.g. `"EUR"` or `"XAU"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

/// Identifies a unit of a currency, e.g. `"cent"` or `"5-rappen"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Currency {
    /// Creates a currency tag.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fails with [`MoneyError::CurrencyMismatch`] unless both tags are equal.
    pub fn ensure_same(&self, other: &Self) -> Result<(), MoneyError> {
        if self == other {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.0.clone(),
                found: other.0.clone(),
            })
        }
    }
}

impl Unit {
    /// Creates a unit tag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fails with [`MoneyError::UnitMismatch`] unless both tags are equal.
    pub fn ensure_same(&self, other: &Self) -> Result<(), MoneyError> {
        if self == other {
            Ok(())
        } else {
            Err(MoneyError::UnitMismatch {
                expected: self.0.clone(),
                found: other.0.clone(),
            })
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl std::str::FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
