//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the crate.
//!
//! # Utilities
//!
//! - Logging setup (`fern` backed `log` dispatch)
//! - Log level parsing
//! - Calendar month arithmetic for audit horizons
//! - Timestamp formatting for log output
//!
//! # Data Structures
//!
//! - `CustomError` - Generic message carrying error used by the binary glue
//!
//! # Example
//!
//! ```rust,ignore
//! use rootcerts::common::common::{add_months, setup_logging};
//!
//! setup_logging(&config)?;
//! let fail_before = add_months(chrono::Utc::now(), 1)?;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;
