use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("certificate is not valid before {not_before} (checked at {at})")]
    NotYetValid { not_before: DateTime<Utc>, at: DateTime<Utc> },
    #[error("certificate expired at {not_after} (checked at {at})")]
    Expired { not_after: DateTime<Utc>, at: DateTime<Utc> },
    #[error("certificate signed by unknown authority {issuer}")]
    UnknownAuthority { issuer: String },
    #[error("issuer {issuer} is not a certificate authority")]
    IssuerNotCa { issuer: String },
    #[error("issuer {issuer} is not valid at {at}")]
    IssuerNotValid { issuer: String, at: DateTime<Utc> },
    #[error("signature by {issuer} does not verify: {reason}")]
    SignatureInvalid { issuer: String, reason: String },
    #[error("certificate could not be re-parsed: {0}")]
    Malformed(String),
}
