//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Verbosity of the `fern` log dispatch
//! - **trust**: Trust anchor selection (forced embedded pool, override variable)
//! - **audit**: Bundle location and the fail/warn horizons in months
//!
//! # Example
//!
//! ```rust,ignore
//! use rootcerts::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
