//! PEM certificate bundle parsing.
//!
//! This module turns PEM text into an ordered sequence of parsed
//! certificates. Block framing follows the usual PEM rules: a block starts
//! at a `-----BEGIN <LABEL>-----` line, may carry `Key: Value` headers and
//! ends at the matching `-----END <LABEL>-----` line.
//!
//! # Parsing Policy
//!
//! - Blocks with broken framing or invalid base64 are not blocks at all and
//!   are passed over.
//! - Blocks whose label is not exactly `CERTIFICATE`, or that carry headers,
//!   are skipped as noise.
//! - A `CERTIFICATE` block whose DER payload does not parse as X.509 is a
//!   corrupted bundle and aborts parsing with [`BundleError`].
//!
//! Order is preserved and duplicates are kept.
//!
//! # Example
//!
//! ```rust,ignore
//! use rootcerts::bundle::structs::certificate_bundle::CertificateBundle;
//!
//! let bundle = CertificateBundle::from_pem(pem_text.as_bytes())?;
//! for record in bundle.iter() {
//!     println!("{} expires {}", record.display_name(), record.not_after);
//! }
//! ```
//!
//! [`BundleError`]: crate::bundle::enums::bundle_error::BundleError

/// Bundle parsing errors.
pub mod enums;

/// Implementation blocks for bundle types.
pub mod impls;

/// Bundle data structures (PEM blocks, certificate records, key usage).
pub mod structs;

/// PEM block decoding.
#[allow(clippy::module_inception)]
pub mod bundle;
