use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustError {
    #[error("Failed to build TLS client configuration: {0}")]
    ClientConfig(String),
}
