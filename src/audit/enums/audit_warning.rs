use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::bundle::structs::key_usage::KeyUsage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditWarning {
    UnexpectedKeyUsage { actual: KeyUsage, unexpected: KeyUsage },
    ExpiresSoon { not_after: DateTime<Utc> },
}
