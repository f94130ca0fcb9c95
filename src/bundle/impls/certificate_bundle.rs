use log::debug;
use rustls::pki_types::CertificateDer;
use crate::bundle::bundle::decode_pem_blocks;
use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_bundle::CertificateBundle;
use crate::bundle::structs::certificate_record::CertificateRecord;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.records.len())
            .field("skipped_blocks", &self.skipped_blocks)
            .finish()
    }
}

impl CertificateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CertificateRecord>) -> Self {
        Self {
            records,
            skipped_blocks: 0,
        }
    }

    pub fn from_pem(pem: &[u8]) -> Result<Self, BundleError> {
        let mut bundle = Self::new();
        for (index, block) in decode_pem_blocks(pem).into_iter().enumerate() {
            if !block.is_certificate() {
                debug!(
                    "[BUNDLE] Skipping PEM block #{} ({}, {} headers)",
                    index,
                    block.label,
                    block.headers.len()
                );
                bundle.skipped_blocks += 1;
                continue;
            }
            let record = CertificateRecord::from_der(CertificateDer::from(block.contents), index)?;
            bundle.records.push(record);
        }
        Ok(bundle)
    }

    pub fn from_file(path: &str) -> Result<Self, BundleError> {
        let pem = std::fs::read(path)
            .map_err(|e| BundleError::BundleFileNotFound(format!("{}: {}", path, e)))?;
        Self::from_pem(&pem)
    }

    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CertificateRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// PEM blocks that were well-framed but not plain certificates.
    pub fn skipped_blocks(&self) -> usize {
        self.skipped_blocks
    }

    pub fn into_records(self) -> Vec<CertificateRecord> {
        self.records
    }
}
