/// Platform store probe backed by `rustls-native-certs`.
pub mod native_system_roots;

/// Result of probing the platform store.
pub mod system_roots;

/// The resolved, process-wide trust anchor set.
pub mod trust_state;
