use std::sync::Arc;
use rustls::RootCertStore;
use crate::trust::enums::trust_source::TrustSource;

#[derive(Clone)]
pub struct TrustState {
    pub(crate) source: TrustSource,
    pub(crate) roots: Arc<RootCertStore>,
    pub(crate) embedded_accepted: usize,
    pub(crate) embedded_skipped: usize,
}
