pub mod native_system_roots;
pub mod system_roots;
pub mod trust_source;
pub mod trust_state;
