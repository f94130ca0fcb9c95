use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("Bundle file not found: {0}")]
    BundleFileNotFound(String),
    #[error("Failed to parse certificate in PEM block #{index}: {reason}")]
    CorruptCertificate { index: usize, reason: String },
}
