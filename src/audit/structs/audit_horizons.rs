use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditHorizons {
    /// Instant used for the "already valid" check.
    pub now: DateTime<Utc>,
    /// Certificates must remain valid until this instant; chain verification
    /// runs as of this instant.
    pub fail_before: DateTime<Utc>,
    /// Certificates expiring before this instant raise a warning.
    pub warn_before: DateTime<Utc>,
}
