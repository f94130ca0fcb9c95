pub mod system_roots_provider;
