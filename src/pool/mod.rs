//! Certificate pool and chain verification.
//!
//! A [`CertificatePool`] is a set of trusted certificates. Verification
//! proves that a certificate reaches the pool at a given reference time:
//!
//! - the certificate's own validity window must cover the reference time;
//! - a certificate that is itself a pool member is anchored by membership;
//! - otherwise a pool member whose subject matches the certificate's issuer,
//!   which is a CA valid at the reference time and whose key verifies the
//!   certificate's signature, completes the chain.
//!
//! The reference time is always supplied by the caller, so a chain can be
//! checked "as of" a future horizon rather than only today.
//!
//! [`CertificatePool`]: crate::pool::structs::certificate_pool::CertificatePool

/// Verification errors.
pub mod enums;

/// Implementation blocks for the pool.
pub mod impls;

/// Pool data structures.
pub mod structs;

/// Unit tests for pool construction and verification.
pub mod tests;
