use chrono::{DateTime, Utc};
use rustls::pki_types::CertificateDer;
use crate::bundle::structs::key_usage::KeyUsage;

/// A parsed certificate. Immutable once built; the DER is kept so the
/// certificate can be re-parsed for signature checks and handed to rustls.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub der: CertificateDer<'static>,
    pub common_name: Option<String>,
    pub subject: String,
    pub issuer: String,
    pub is_ca: bool,
    pub key_usage: KeyUsage,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub(crate) subject_raw: Vec<u8>,
    pub(crate) issuer_raw: Vec<u8>,
}
