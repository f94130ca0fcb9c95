use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;
use crate::trust::structs::system_roots::SystemRoots;

impl SystemRoots {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            store: RootCertStore::empty(),
            errors: Vec::new(),
        }
    }

    /// Builds the probe result from whatever the platform returned.
    /// Certificates rustls cannot use as anchors are dropped.
    pub fn from_certificates(certificates: Vec<CertificateDer<'static>>, errors: Vec<String>) -> Self {
        let available = errors.is_empty() || !certificates.is_empty();
        let mut store = RootCertStore::empty();
        store.add_parsable_certificates(certificates);
        Self {
            available,
            store,
            errors,
        }
    }

    pub fn is_non_empty(&self) -> bool {
        !self.store.is_empty()
    }
}
