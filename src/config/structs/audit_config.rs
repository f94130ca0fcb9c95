use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    /// PEM bundle to audit; the embedded bundle when absent.
    pub bundle_path: Option<String>,
    pub fail_after_months: u32,
    pub warn_after_months: u32,
    pub json_output: bool
}
