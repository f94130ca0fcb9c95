//! Trust anchor selection.
//!
//! Decides, once per process, which root certificate pool becomes the active
//! trust anchor set:
//!
//! - the operating system store, when it could be probed, holds at least one
//!   usable root and no override is requested;
//! - otherwise the embedded Mozilla root list, parsed best-effort: entries
//!   that do not parse are skipped and the rest are installed.
//!
//! The override is a single boolean: the environment variable named in the
//! configuration (`ROOTCERTS_ENABLE` by default) set to exactly `1`, or
//! `trust.force_embedded = true`.
//!
//! # Lifecycle
//!
//! `Uninitialized -> SystemTrusted | EmbeddedTrusted`. The transition happens
//! in [`install`], guarded by a `OnceLock`, and is final.
//!
//! # Example
//!
//! ```rust,ignore
//! use rootcerts::trust::structs::native_system_roots::NativeSystemRoots;
//! use rootcerts::trust::trust::{install, override_from_env};
//!
//! let state = install(&NativeSystemRoots, override_from_env("ROOTCERTS_ENABLE"));
//! let tls = state.client_config()?;
//! ```
//!
//! [`install`]: crate::trust::trust::install

/// Trust source and error enumerations.
pub mod enums;

/// Implementation blocks for trust types.
pub mod impls;

/// Trust data structures (system roots, resolved state).
pub mod structs;

/// System store probing abstraction.
pub mod traits;

/// Resolution policy and the process-wide install.
#[allow(clippy::module_inception)]
pub mod trust;
