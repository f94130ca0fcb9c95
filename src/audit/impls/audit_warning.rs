use std::fmt;
use crate::audit::enums::audit_warning::AuditWarning;
use crate::bundle::structs::key_usage::KeyUsage;
use crate::common::common::format_timestamp;

impl fmt::Display for AuditWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditWarning::UnexpectedKeyUsage { actual, unexpected } => {
                write!(f, "unexpected key usage {} (bits {} outside expected {})", actual, unexpected, KeyUsage::EXPECTED_CA)
            }
            AuditWarning::ExpiresSoon { not_after } => {
                write!(f, "expires soon: {}", format_timestamp(not_after))
            }
        }
    }
}
