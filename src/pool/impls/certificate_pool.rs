use chrono::{DateTime, Utc};
use x509_parser::prelude::*;
use crate::bundle::structs::certificate_bundle::CertificateBundle;
use crate::bundle::structs::certificate_record::CertificateRecord;
use crate::pool::enums::verify_error::VerifyError;
use crate::pool::structs::certificate_pool::CertificatePool;

impl std::fmt::Debug for CertificatePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificatePool")
            .field("certificates_count", &self.certificates.len())
            .field("subjects_count", &self.by_subject.len())
            .finish()
    }
}

impl CertificatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[CertificateRecord]) -> Self {
        let mut pool = Self::new();
        for record in records {
            pool.add(record.clone());
        }
        pool
    }

    pub fn from_bundle(bundle: &CertificateBundle) -> Self {
        Self::from_records(bundle.records())
    }

    /// Adds a certificate. Returns `false` when an identical certificate is
    /// already present.
    pub fn add(&mut self, record: CertificateRecord) -> bool {
        if self.contains(&record) {
            return false;
        }
        let index = self.certificates.len();
        self.by_subject
            .entry(record.subject_raw.clone())
            .or_default()
            .push(index);
        self.certificates.push(record);
        true
    }

    pub fn contains(&self, record: &CertificateRecord) -> bool {
        self.by_subject
            .get(&record.subject_raw)
            .map(|indexes| indexes.iter().any(|&index| self.certificates[index].der == record.der))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn certificates(&self) -> &[CertificateRecord] {
        &self.certificates
    }

    /// Verifies `record` against the pool as of `at` and returns the chain,
    /// leaf first.
    pub fn verify(&self, record: &CertificateRecord, at: DateTime<Utc>) -> Result<Vec<CertificateRecord>, VerifyError> {
        if at < record.not_before {
            return Err(VerifyError::NotYetValid { not_before: record.not_before, at });
        }
        if at > record.not_after {
            return Err(VerifyError::Expired { not_after: record.not_after, at });
        }
        if self.contains(record) {
            return Ok(vec![record.clone()]);
        }

        let candidates = match self.by_subject.get(&record.issuer_raw) {
            Some(candidates) => candidates,
            None => return Err(VerifyError::UnknownAuthority { issuer: record.issuer.clone() }),
        };
        let (_, parsed) = X509Certificate::from_der(record.der.as_ref())
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;

        let mut last_error = VerifyError::UnknownAuthority { issuer: record.issuer.clone() };
        for &index in candidates {
            let issuer = &self.certificates[index];
            if !issuer.is_ca {
                last_error = VerifyError::IssuerNotCa { issuer: issuer.display_name() };
                continue;
            }
            if !issuer.is_valid_at(&at) {
                last_error = VerifyError::IssuerNotValid { issuer: issuer.display_name(), at };
                continue;
            }
            let (_, issuer_parsed) = X509Certificate::from_der(issuer.der.as_ref())
                .map_err(|e| VerifyError::Malformed(e.to_string()))?;
            match parsed.verify_signature(Some(issuer_parsed.public_key())) {
                Ok(()) => return Ok(vec![record.clone(), issuer.clone()]),
                Err(e) => {
                    last_error = VerifyError::SignatureInvalid {
                        issuer: issuer.display_name(),
                        reason: e.to_string(),
                    };
                }
            }
        }
        Err(last_error)
    }
}
