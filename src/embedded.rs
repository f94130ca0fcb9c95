//! The bundled Mozilla root certificate list.
//!
//! Reading the data has no side effects on the process trust state; use
//! [`crate::trust::trust::install`] for that.
//!
//! Use of these certificates is governed by the Mozilla Public License 2.0.

const MOZILLA_CA_CERTIFICATES_PEM: &str = include_str!("../data/cacert.pem");

/// Mozilla's included CA certificates (websites trust bit) in PEM format.
pub fn mozilla_ca_certificates_pem() -> &'static str {
    MOZILLA_CA_CERTIFICATES_PEM
}
