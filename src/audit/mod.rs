//! Certificate set auditor.
//!
//! Proves that every entry of a PEM bundle is fit to be a trust anchor and
//! reports when the set as a whole stops being usable.
//!
//! # Checks (per certificate)
//!
//! 1. The certificate must be a CA (failure, evaluation continues).
//! 2. Key usage outside `CertSign | CRLSign | DigitalSignature` is a warning.
//! 3. `notBefore` after "now" fails the certificate; nothing else is checked.
//! 4. `notAfter` before the fail horizon fails the certificate; nothing else
//!    is checked. `notAfter` before the warn horizon is a warning.
//! 5. The certificate must chain-verify against a pool made of the whole
//!    bundle, using the fail horizon as the verification time.
//!
//! The report carries every per-certificate outcome in bundle order, an
//! overall success flag and the earliest `notAfter` of the set together with
//! the name of the certificate that owns it.
//!
//! All instants are injected through [`AuditHorizons`]; the auditor never
//! reads the wall clock, so identical inputs always give identical reports.
//!
//! # Example
//!
//! ```rust,ignore
//! use rootcerts::audit::audit::audit;
//! use rootcerts::audit::structs::audit_horizons::AuditHorizons;
//!
//! // must stay valid for one month, warn three months ahead
//! let horizons = AuditHorizons::from_months(chrono::Utc::now(), 1, 3)?;
//! let report = audit(pem.as_bytes(), &horizons)?;
//! assert!(report.success);
//! ```
//!
//! [`AuditHorizons`]: crate::audit::structs::audit_horizons::AuditHorizons

/// Verdict and warning enumerations.
pub mod enums;

/// Implementation blocks for audit types.
pub mod impls;

/// Audit data structures (horizons, per-certificate results, report).
pub mod structs;

/// The audit algorithm.
#[allow(clippy::module_inception)]
pub mod audit;
