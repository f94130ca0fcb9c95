/// Ordered sequence of parsed certificates.
pub mod certificate_bundle;

/// One parsed certificate and the attributes the auditor inspects.
pub mod certificate_record;

/// X.509 key usage bit set.
pub mod key_usage;

/// A decoded PEM block.
pub mod pem_block;
