use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AuditVerdict {
    Pass,
    FailNotCa,
    FailNotYetValid,
    FailExpired,
    FailChainInvalid,
}
