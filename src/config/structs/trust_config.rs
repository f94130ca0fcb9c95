use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrustConfig {
    /// Install the embedded pool even when the system store is usable.
    pub force_embedded: bool,
    /// Environment variable that forces the embedded pool when set to `1`.
    pub override_env: String
}
