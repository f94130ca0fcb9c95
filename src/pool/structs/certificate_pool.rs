use std::collections::HashMap;
use crate::bundle::structs::certificate_record::CertificateRecord;

#[derive(Clone, Default)]
pub struct CertificatePool {
    pub(crate) certificates: Vec<CertificateRecord>,
    pub(crate) by_subject: HashMap<Vec<u8>, Vec<usize>>,
}
