pub mod certificate_bundle;
pub mod certificate_record;
pub mod key_usage;
pub mod pem_block;
