use rustls::RootCertStore;

#[derive(Debug, Clone)]
pub struct SystemRoots {
    /// The probe found a store: it produced certificates or reported no error.
    pub available: bool,
    pub store: RootCertStore,
    pub errors: Vec<String>,
}
