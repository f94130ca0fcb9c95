use serde::Serialize;
use crate::audit::structs::audit_horizons::AuditHorizons;
use crate::audit::structs::certificate_audit::CertificateAudit;
use crate::audit::structs::expiry_horizon::ExpiryHorizon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub horizons: AuditHorizons,
    pub certificates: Vec<CertificateAudit>,
    pub success: bool,
    /// Earliest `notAfter` of the set; `None` for an empty bundle.
    pub horizon: Option<ExpiryHorizon>,
    pub skipped_blocks: usize,
}
