use chrono::{DateTime, Utc};
use crate::audit::structs::audit_horizons::AuditHorizons;
use crate::common::common::add_months;
use crate::common::structs::custom_error::CustomError;

impl AuditHorizons {
    pub fn new(now: DateTime<Utc>, fail_before: DateTime<Utc>, warn_before: DateTime<Utc>) -> Self {
        Self {
            now,
            fail_before,
            warn_before,
        }
    }

    /// Horizons a number of calendar months after `now`.
    pub fn from_months(now: DateTime<Utc>, fail_after_months: u32, warn_after_months: u32) -> Result<Self, CustomError> {
        Ok(Self {
            now,
            fail_before: add_months(now, fail_after_months)?,
            warn_before: add_months(now, warn_after_months)?,
        })
    }
}
