use serde::{Deserialize, Serialize};
use crate::config::structs::audit_config::AuditConfig;
use crate::config::structs::trust_config::TrustConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub trust: TrustConfig,
    #[serde(default)]
    pub audit: AuditConfig
}
