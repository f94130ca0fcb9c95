use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::audit::enums::audit_verdict::AuditVerdict;
use crate::audit::enums::audit_warning::AuditWarning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateAudit {
    pub name: String,
    pub subject: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// `[Pass]`, or every failure found, in check order.
    pub verdicts: Vec<AuditVerdict>,
    pub warnings: Vec<AuditWarning>,
    pub chain_error: Option<String>,
}
