use crate::audit::enums::audit_verdict::AuditVerdict;
use crate::audit::structs::certificate_audit::CertificateAudit;

impl CertificateAudit {
    pub fn is_pass(&self) -> bool {
        self.verdicts.iter().all(|verdict| !verdict.is_failure())
    }

    pub fn has(&self, verdict: AuditVerdict) -> bool {
        self.verdicts.contains(&verdict)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
