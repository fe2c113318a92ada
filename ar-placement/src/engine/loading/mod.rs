//! Runtime configuration loading.
//!
//! Defaults live in the `constants` crate. An optional JSON asset overrides
//! them once the asset server has it; missing fields keep their defaults.

/// JSON config asset, its loader resource and the systems applying it.
pub mod config_loader;

pub use config_loader::{ArConfig, ConfigLoader, ConfigPlugin};
