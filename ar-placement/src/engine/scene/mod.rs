//! Scene graph bootstrap: camera, light and the placeable target.

/// Startup system spawning the AR scene.
pub mod setup;

pub use setup::{SceneRoot, spawn_scene};
