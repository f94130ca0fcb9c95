use crate::audit::structs::audit_report::AuditReport;
use crate::audit::structs::certificate_audit::CertificateAudit;

impl AuditReport {
    pub fn failures(&self) -> impl Iterator<Item = &CertificateAudit> {
        self.certificates.iter().filter(|audit| !audit.is_pass())
    }

    pub fn passed_count(&self) -> usize {
        self.certificates.iter().filter(|audit| audit.is_pass()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.certificates.len() - self.passed_count()
    }

    pub fn warnings_count(&self) -> usize {
        self.certificates.iter().map(|audit| audit.warnings.len()).sum()
    }

    pub fn has_warnings(&self) -> bool {
        self.certificates.iter().any(|audit| audit.has_warnings())
    }
}
