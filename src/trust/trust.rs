use std::sync::{Arc, OnceLock};
use log::{info, warn};
use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;
use crate::bundle::bundle::decode_pem_blocks;
use crate::embedded::mozilla_ca_certificates_pem;
use crate::trust::enums::trust_source::TrustSource;
use crate::trust::structs::system_roots::SystemRoots;
use crate::trust::structs::trust_state::TrustState;
use crate::trust::traits::system_roots_provider::SystemRootsProvider;

static TRUST_STATE: OnceLock<TrustState> = OnceLock::new();

/// The override forces the embedded pool only for the exact value `1`.
pub fn parse_override(value: Option<&str>) -> bool
{
    value == Some("1")
}

pub fn override_from_env(variable: &str) -> bool
{
    parse_override(std::env::var(variable).ok().as_deref())
}

pub fn resolve_source(system_pool_available: bool, system_pool_non_empty: bool, force_override: bool) -> TrustSource
{
    if system_pool_available && system_pool_non_empty && !force_override {
        return TrustSource::System;
    }
    TrustSource::Embedded
}

/// Builds a root store from PEM text, best-effort. Returns the store with
/// the number of accepted and skipped entries.
pub fn embedded_root_store(pem: &[u8]) -> (RootCertStore, usize, usize)
{
    let mut skipped = 0;
    let mut certificates = Vec::new();
    for block in decode_pem_blocks(pem) {
        if block.is_certificate() {
            certificates.push(CertificateDer::from(block.contents));
        } else {
            skipped += 1;
        }
    }
    let mut store = RootCertStore::empty();
    let (accepted, ignored) = store.add_parsable_certificates(certificates);
    (store, accepted, skipped + ignored)
}

/// Applies the selection policy. Embedded data is only parsed when the
/// embedded pool is chosen.
pub fn resolve(system: SystemRoots, force_override: bool, embedded_pem: &[u8]) -> TrustState
{
    match resolve_source(system.available, system.is_non_empty(), force_override) {
        TrustSource::System => TrustState {
            source: TrustSource::System,
            roots: Arc::new(system.store),
            embedded_accepted: 0,
            embedded_skipped: 0,
        },
        TrustSource::Embedded => {
            let (store, accepted, skipped) = embedded_root_store(embedded_pem);
            if skipped > 0 {
                warn!("[TRUST] Skipped {} unusable entries in the embedded bundle", skipped);
            }
            TrustState {
                source: TrustSource::Embedded,
                roots: Arc::new(store),
                embedded_accepted: accepted,
                embedded_skipped: skipped,
            }
        }
    }
}

pub fn resolve_with(provider: &dyn SystemRootsProvider, force_override: bool, embedded_pem: &[u8]) -> TrustState
{
    resolve(provider.load(), force_override, embedded_pem)
}

/// Resolves the process trust state on first call; later calls, including
/// concurrent ones, get the same state and their arguments are ignored.
pub fn install(provider: &dyn SystemRootsProvider, force_override: bool) -> &'static TrustState
{
    TRUST_STATE.get_or_init(|| {
        let state = resolve_with(provider, force_override, mozilla_ca_certificates_pem().as_bytes());
        info!(
            "[TRUST] Installed {} trust anchors ({} roots, override: {})",
            state.source(),
            state.roots_count(),
            force_override
        );
        state
    })
}

/// The installed trust state, if [`install`] already ran.
pub fn trust_state() -> Option<&'static TrustState>
{
    TRUST_STATE.get()
}
