//! Common types used across the workspace.

pub mod tag;

pub use tag::{Currency, Unit};
