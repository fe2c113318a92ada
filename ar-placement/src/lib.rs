//! Tap-to-place augmented reality demo built on Bevy.
//!
//! The app renders a transparent scene over the camera feed of an external AR
//! runtime, lets the user tap a detected surface to place a cube there, and
//! rotates the cube about its vertical axis with horizontal drags.

/// Scene bootstrap, session lifecycle, configuration and surface hit testing.
pub mod engine;

/// JSON-RPC 2.0 bridge to the page hosting the wasm canvas.
pub mod rpc;

/// Interaction tools driven by pointer input.
pub mod tools;
