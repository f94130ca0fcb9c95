/// The three instants an audit is evaluated against.
pub mod audit_horizons;

/// Outcome of auditing one certificate.
pub mod certificate_audit;

/// Earliest expiry across the bundle.
pub mod expiry_horizon;

/// Aggregated outcome of a whole bundle.
pub mod audit_report;
