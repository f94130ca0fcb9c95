pub mod certificate_pool;
