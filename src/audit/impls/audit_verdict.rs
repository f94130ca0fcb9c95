use std::fmt;
use crate::audit::enums::audit_verdict::AuditVerdict;

impl AuditVerdict {
    pub fn is_failure(&self) -> bool {
        !matches!(self, AuditVerdict::Pass)
    }
}

impl fmt::Display for AuditVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AuditVerdict::Pass => "pass",
            AuditVerdict::FailNotCa => "not a certificate authority",
            AuditVerdict::FailNotYetValid => "not yet valid",
            AuditVerdict::FailExpired => "expires before the fail horizon",
            AuditVerdict::FailChainInvalid => "chain verification failed",
        };
        write!(f, "{}", text)
    }
}
