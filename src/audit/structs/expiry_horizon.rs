use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryHorizon {
    pub name: String,
    pub not_after: DateTime<Utc>,
}
