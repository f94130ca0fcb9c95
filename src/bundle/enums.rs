pub mod bundle_error;
