/// Set of trusted certificates indexed by subject.
pub mod certificate_pool;
