//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Trust anchor selection settings.
pub mod trust_config;

/// Certificate set audit settings.
pub mod audit_config;
