//! # rootcerts
//!
//! A fallback trust anchor set for processes that cannot find an operating
//! system certificate store, together with an auditor proving that a root
//! certificate bundle is fit for use as a trust anchor.
//!
//! ## Overview
//!
//! The crate embeds Mozilla's included CA certificate list (websites trust
//! bit) as PEM text. At startup, [`trust::trust::install`] keeps the system
//! store when it is usable and installs the embedded roots otherwise, or when
//! the override variable `ROOTCERTS_ENABLE=1` is set. The resolved roots are
//! handed to rustls through [`trust::structs::trust_state::TrustState`].
//!
//! The auditor parses a PEM bundle, checks every certificate (CA flag, key
//! usage, validity now and at a future horizon, chain verification against
//! the bundle itself) and reports a verdict per certificate together with the
//! earliest expiry of the set.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rootcerts::audit::audit::audit;
//! use rootcerts::audit::structs::audit_horizons::AuditHorizons;
//! use rootcerts::embedded::mozilla_ca_certificates_pem;
//!
//! let horizons = AuditHorizons::from_months(chrono::Utc::now(), 1, 3)?;
//! let report = audit(mozilla_ca_certificates_pem().as_bytes(), &horizons)?;
//! println!("success: {}, earliest expiry: {:?}", report.success, report.horizon);
//! ```
//!
//! ## Modules
//!
//! - [`audit`] - Certificate set auditor
//! - [`bundle`] - PEM decoding and certificate records
//! - [`common`] - Logging setup, errors and time helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`embedded`] - The bundled root certificate list
//! - [`pool`] - Certificate pool and chain verification
//! - [`structs`] - CLI argument parsing
//! - [`trust`] - Trust anchor selection and process-wide install

/// Certificate set auditor.
///
/// Evaluates every certificate of a bundle and aggregates the outcome into a
/// report with an overall verdict and the bundle's expiry horizon.
pub mod audit;

/// PEM decoding and certificate records.
pub mod bundle;

/// Common utilities and shared functionality.
///
/// Contains logging setup, the generic `CustomError` and calendar helpers.
pub mod common;

/// Configuration management module.
pub mod config;

/// The bundled Mozilla root certificate list.
pub mod embedded;

/// Certificate pool and chain verification at a reference time.
pub mod pool;

/// CLI argument parsing.
pub mod structs;

/// Trust anchor selection.
///
/// Chooses between the system store and the embedded roots exactly once per
/// process and exposes the result to TLS clients.
pub mod trust;
