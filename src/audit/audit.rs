use log::{error, info, warn};
use crate::audit::enums::audit_verdict::AuditVerdict;
use crate::audit::enums::audit_warning::AuditWarning;
use crate::audit::structs::audit_horizons::AuditHorizons;
use crate::audit::structs::audit_report::AuditReport;
use crate::audit::structs::certificate_audit::CertificateAudit;
use crate::audit::structs::expiry_horizon::ExpiryHorizon;
use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_bundle::CertificateBundle;
use crate::bundle::structs::certificate_record::CertificateRecord;
use crate::bundle::structs::key_usage::KeyUsage;
use crate::common::common::format_timestamp;
use crate::pool::structs::certificate_pool::CertificatePool;

/// Parses `pem` and audits it. Only a corrupted certificate block is an
/// error; every policy violation ends up in the report.
pub fn audit(pem: &[u8], horizons: &AuditHorizons) -> Result<AuditReport, BundleError>
{
    let bundle = CertificateBundle::from_pem(pem)?;
    Ok(audit_bundle(&bundle, horizons))
}

pub fn audit_bundle(bundle: &CertificateBundle, horizons: &AuditHorizons) -> AuditReport
{
    info!(
        "[AUDIT] Checking {} certificates, valid until {} (warn until {})",
        bundle.len(),
        format_timestamp(&horizons.fail_before),
        format_timestamp(&horizons.warn_before)
    );
    let pool = CertificatePool::from_bundle(bundle);
    let certificates: Vec<CertificateAudit> = bundle
        .iter()
        .map(|record| audit_certificate(record, &pool, horizons))
        .collect();
    certificates.iter().for_each(log_certificate);

    let success = certificates.iter().all(CertificateAudit::is_pass);
    let horizon = earliest_expiry(&certificates);
    match (&horizon, success) {
        (Some(horizon), true) => info!("[AUDIT] Success. Earliest expiry: {} ({})", format_timestamp(&horizon.not_after), horizon.name),
        (Some(horizon), false) => error!("[AUDIT] Failed. Earliest expiry: {} ({})", format_timestamp(&horizon.not_after), horizon.name),
        (None, _) => warn!("[AUDIT] Bundle contains no certificates"),
    }

    AuditReport {
        horizons: *horizons,
        certificates,
        success,
        horizon,
        skipped_blocks: bundle.skipped_blocks(),
    }
}

/// Audits one certificate against the bundle pool. Failures accumulate; only
/// a temporal failure stops the remaining checks.
pub fn audit_certificate(record: &CertificateRecord, pool: &CertificatePool, horizons: &AuditHorizons) -> CertificateAudit
{
    let mut verdicts = Vec::new();
    let mut warnings = Vec::new();
    let mut chain_error = None;

    if !record.is_ca {
        verdicts.push(AuditVerdict::FailNotCa);
    }
    let unexpected = record.key_usage.difference(KeyUsage::EXPECTED_CA);
    if !unexpected.is_empty() {
        warnings.push(AuditWarning::UnexpectedKeyUsage { actual: record.key_usage, unexpected });
    }

    if record.not_before > horizons.now {
        verdicts.push(AuditVerdict::FailNotYetValid);
    } else if record.not_after < horizons.fail_before {
        verdicts.push(AuditVerdict::FailExpired);
    } else {
        if record.not_after < horizons.warn_before {
            warnings.push(AuditWarning::ExpiresSoon { not_after: record.not_after });
        }
        if let Err(e) = pool.verify(record, horizons.fail_before) {
            verdicts.push(AuditVerdict::FailChainInvalid);
            chain_error = Some(e.to_string());
        }
    }

    if verdicts.is_empty() {
        verdicts.push(AuditVerdict::Pass);
    }

    CertificateAudit {
        name: record.display_name(),
        subject: record.subject.clone(),
        not_before: record.not_before,
        not_after: record.not_after,
        verdicts,
        warnings,
        chain_error,
    }
}

/// Earliest `notAfter`; ties go to the smallest name so bundle order never
/// changes the result.
pub fn earliest_expiry(certificates: &[CertificateAudit]) -> Option<ExpiryHorizon>
{
    certificates
        .iter()
        .min_by(|a, b| a.not_after.cmp(&b.not_after).then_with(|| a.name.cmp(&b.name)))
        .map(|audit| ExpiryHorizon {
            name: audit.name.clone(),
            not_after: audit.not_after,
        })
}

fn log_certificate(audit: &CertificateAudit)
{
    for warning in &audit.warnings {
        warn!("[AUDIT] {}: {}", audit.name, warning);
    }
    if audit.is_pass() {
        info!("[AUDIT] {} (expires: {})", audit.name, format_timestamp(&audit.not_after));
        return;
    }
    for verdict in audit.verdicts.iter().filter(|verdict| verdict.is_failure()) {
        match verdict {
            AuditVerdict::FailNotYetValid => error!("[AUDIT] {}: fails NotBefore check: {}", audit.name, format_timestamp(&audit.not_before)),
            AuditVerdict::FailExpired => error!("[AUDIT] {}: fails NotAfter check: {}", audit.name, format_timestamp(&audit.not_after)),
            AuditVerdict::FailChainInvalid => error!("[AUDIT] {}: {}", audit.name, audit.chain_error.as_deref().unwrap_or("chain verification failed")),
            _ => error!("[AUDIT] {}: {}", audit.name, verdict),
        }
    }
}
