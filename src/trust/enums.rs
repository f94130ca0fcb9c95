pub mod trust_error;
pub mod trust_source;
