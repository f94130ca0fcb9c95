use log::{debug, warn};
use crate::trust::structs::native_system_roots::NativeSystemRoots;
use crate::trust::structs::system_roots::SystemRoots;
use crate::trust::traits::system_roots_provider::SystemRootsProvider;

impl SystemRootsProvider for NativeSystemRoots {
    fn load(&self) -> SystemRoots {
        let result = rustls_native_certs::load_native_certs();
        let errors: Vec<String> = result.errors.iter().map(|e| e.to_string()).collect();
        for error in &errors {
            warn!("[TRUST] System store probe: {}", error);
        }
        let roots = SystemRoots::from_certificates(result.certs, errors);
        debug!(
            "[TRUST] System store probe: available={}, {} usable roots",
            roots.available,
            roots.store.len()
        );
        roots
    }
}
