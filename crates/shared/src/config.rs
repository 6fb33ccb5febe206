//! Decimal formatting configuration.

use serde::{Deserialize, Serialize};

use crate::error::MoneyResult;

/// Options controlling how a rational is rendered as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalFormat {
    /// Separator between the integral and fractional digits.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Maximum number of fractional digits.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Round half-up on the last digit instead of truncating.
    #[serde(default)]
    pub round: bool,
}

fn default_separator() -> String {
    ".".to_string()
}

const fn default_decimals() -> usize {
    12
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            decimals: default_decimals(),
            round: false,
        }
    }
}

impl DecimalFormat {
    /// Returns a copy with the given separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns a copy with the given number of fractional digits.
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns a copy with half-up rounding switched on or off.
    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Loads formatting defaults from config files and the environment.
    ///
    /// Sources, later ones winning: `config/format`, `config/{EXACTLY_MODE}`,
    /// then `EXACTLY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> MoneyResult<Self> {
        let mode = std::env::var("EXACTLY_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/format").required(false))
            .add_source(config::File::with_name(&format!("config/{mode}")).required(false))
            .add_source(config::Environment::with_prefix("EXACTLY").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
