//! Core application setup and session state management.
//!
//! Handles plugin wiring, window configuration, and the AR session state
//! machine for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene, placement tool, configuration
/// loading and the host RPC bridge.
pub mod app_setup;

/// AR session state machine and the requests that drive it.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds to the host canvas with a transparent surface on web targets.
pub mod window_config;
