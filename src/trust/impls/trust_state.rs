use std::sync::Arc;
use rustls::{ClientConfig, RootCertStore};
use crate::trust::enums::trust_error::TrustError;
use crate::trust::enums::trust_source::TrustSource;
use crate::trust::structs::trust_state::TrustState;

impl std::fmt::Debug for TrustState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustState")
            .field("source", &self.source)
            .field("roots_count", &self.roots.len())
            .field("embedded_accepted", &self.embedded_accepted)
            .field("embedded_skipped", &self.embedded_skipped)
            .finish()
    }
}

impl TrustState {
    pub fn source(&self) -> TrustSource {
        self.source
    }

    pub fn roots(&self) -> Arc<RootCertStore> {
        Arc::clone(&self.roots)
    }

    pub fn roots_count(&self) -> usize {
        self.roots.len()
    }

    /// Embedded entries installed; zero when the system store is used.
    pub fn embedded_accepted(&self) -> usize {
        self.embedded_accepted
    }

    /// Embedded PEM blocks that were not usable certificates.
    pub fn embedded_skipped(&self) -> usize {
        self.embedded_skipped
    }

    pub fn client_config(&self) -> Result<ClientConfig, TrustError> {
        let config = ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()
            .map_err(|e| TrustError::ClientConfig(e.to_string()))?
            .with_root_certificates(self.roots())
            .with_no_client_auth();
        Ok(config)
    }
}
