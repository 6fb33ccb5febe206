//! Shared types, errors, and configuration for Exactly.
//!
//! This crate provides what every other crate builds on:
//! - Currency and unit tags
//! - The money error type
//! - Decimal formatting configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::DecimalFormat;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Unit};
