pub mod audit_horizons;
pub mod audit_report;
pub mod audit_verdict;
pub mod audit_warning;
pub mod certificate_audit;
