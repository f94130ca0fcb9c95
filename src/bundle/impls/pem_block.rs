use crate::bundle::bundle::CERTIFICATE_LABEL;
use crate::bundle::structs::pem_block::PemBlock;

impl PemBlock {
    /// A plain certificate block: `CERTIFICATE` label and no headers.
    pub fn is_certificate(&self) -> bool {
        self.label == CERTIFICATE_LABEL && self.headers.is_empty()
    }
}
