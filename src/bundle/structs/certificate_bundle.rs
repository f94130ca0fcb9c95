use crate::bundle::structs::certificate_record::CertificateRecord;

#[derive(Clone, Default)]
pub struct CertificateBundle {
    pub(crate) records: Vec<CertificateRecord>,
    pub(crate) skipped_blocks: usize,
}
