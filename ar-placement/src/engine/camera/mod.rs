//! Scene camera driven by the external tracker.
//!
//! The AR runtime owns 6-DoF pose estimation. The hosting page forwards each
//! tracked camera pose, and this module copies it onto the scene camera so
//! rendered content lines up with the camera feed.

/// Tracked camera marker, pose update events and the system applying them.
pub mod tracked_camera;

pub use tracked_camera::{CameraPoseUpdate, TrackedCamera, TrackedCameraPlugin};
