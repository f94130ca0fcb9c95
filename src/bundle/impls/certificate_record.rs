use chrono::{DateTime, Utc};
use rustls::pki_types::CertificateDer;
use x509_parser::objects::{oid2abbrev, oid_registry};
use x509_parser::prelude::*;
use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_record::CertificateRecord;
use crate::bundle::structs::key_usage::KeyUsage;

impl std::fmt::Debug for CertificateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateRecord")
            .field("subject", &self.subject)
            .field("issuer", &self.issuer)
            .field("is_ca", &self.is_ca)
            .field("key_usage", &self.key_usage)
            .field("not_before", &self.not_before)
            .field("not_after", &self.not_after)
            .field("der_len", &self.der.len())
            .finish()
    }
}

impl CertificateRecord {
    /// Parses one DER certificate. `index` is its position in the bundle and
    /// only feeds the error message.
    pub fn from_der(der: CertificateDer<'static>, index: usize) -> Result<CertificateRecord, BundleError> {
        let corrupt = |reason: String| BundleError::CorruptCertificate { index, reason };

        let (rest, cert) = X509Certificate::from_der(der.as_ref())
            .map_err(|e| corrupt(e.to_string()))?;
        if !rest.is_empty() {
            return Err(corrupt(format!("{} trailing bytes after certificate", rest.len())));
        }

        let common_name = cert
            .subject()
            .iter_common_name()
            .last()
            .and_then(|cn| cn.as_str().ok())
            .filter(|cn| !cn.is_empty())
            .map(str::to_string);
        let key_usage = match cert.key_usage() {
            Ok(Some(extension)) => KeyUsage::from_bits(extension.value.flags),
            Ok(None) => KeyUsage::empty(),
            Err(e) => return Err(corrupt(format!("key usage: {}", e))),
        };
        let not_before = asn1_to_utc(&cert.validity().not_before).ok_or_else(|| corrupt(String::from("notBefore out of range")))?;
        let not_after = asn1_to_utc(&cert.validity().not_after).ok_or_else(|| corrupt(String::from("notAfter out of range")))?;
        let subject = rfc2253_name(cert.subject());
        let issuer = rfc2253_name(cert.issuer());
        let subject_raw = cert.subject().as_raw().to_vec();
        let issuer_raw = cert.issuer().as_raw().to_vec();
        let is_ca = cert.is_ca();

        Ok(CertificateRecord {
            der,
            common_name,
            subject,
            issuer,
            is_ca,
            key_usage,
            not_before,
            not_after,
            subject_raw,
            issuer_raw,
        })
    }

    /// Common name; otherwise the subject DN flagged as missing a common
    /// name; otherwise the issuer DN.
    pub fn display_name(&self) -> String {
        if let Some(common_name) = &self.common_name {
            return common_name.clone();
        }
        if !self.subject.is_empty() {
            return format!("{} (missing common name)", self.subject);
        }
        self.issuer.clone()
    }

    /// Subject and issuer names are byte-identical.
    pub fn is_self_issued(&self) -> bool {
        self.subject_raw == self.issuer_raw
    }

    pub fn is_valid_at(&self, at: &DateTime<Utc>) -> bool {
        self.not_before <= *at && *at <= self.not_after
    }
}

fn asn1_to_utc(time: &ASN1Time) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0)
}

/// Distinguished name in RFC 2253 order: last RDN first, comma separated,
/// multi-valued RDNs joined with `+`.
fn rfc2253_name(name: &X509Name<'_>) -> String {
    let registry = oid_registry();
    let rdns: Vec<_> = name.iter().collect();
    rdns.into_iter()
        .rev()
        .map(|rdn| {
            rdn.iter()
                .map(|attribute| {
                    let key = oid2abbrev(attribute.attr_type(), registry)
                        .map(str::to_string)
                        .unwrap_or_else(|_| attribute.attr_type().to_id_string());
                    let value = match attribute.as_str() {
                        Ok(value) => value.to_string(),
                        Err(_) => format!("#{}", attribute.attr_value().as_bytes().iter().map(|b| format!("{:02x}", b)).collect::<String>()),
                    };
                    format!("{}={}", key, value)
                })
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(",")
}
