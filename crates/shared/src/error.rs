//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by rational and money operations.
///
/// Every variant is local to the failing call. Nothing is retried, clamped
/// or logged on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// An argument is outside its domain (zero denominator, non-positive scale ratio).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Division by, or inversion of, a zero-valued rational.
    #[error("Division by zero")]
    DivisionByZero,

    /// Malformed decimal string.
    #[error("Cannot parse decimal {input:?}: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two values carry different currency tags.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency required by the left operand (or scale / rate).
        expected: String,
        /// Currency carried by the right operand.
        found: String,
    },

    /// Two discrete values carry different unit tags.
    #[error("Unit mismatch: expected {expected}, found {found}")]
    UnitMismatch {
        /// Unit of the left operand.
        expected: String,
        /// Unit of the right operand.
        found: String,
    },

    /// Formatting configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Shorthand for a [`MoneyError::Parse`].
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnitMismatch { .. } => "UNIT_MISMATCH",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
