pub mod audit_verdict;
pub mod audit_warning;
