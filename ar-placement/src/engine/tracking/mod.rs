//! Surface hit testing against the tracked environment.
//!
//! The placement tool never talks to an AR runtime directly. It asks a
//! `SurfaceHitTest` provider for candidate surface poses under a normalized
//! screen point. `HitTestBackend` is the resource-level tagged union over the
//! concrete providers:
//!
//! - `Xr8`: browser builds, forwarding to `XR8.XrController.hitTest`.
//! - `GroundPlane`: native builds, intersecting the camera ray with a
//!   horizontal plane so the interaction can be exercised without a device.


/// Camera-ray versus horizontal plane provider for native builds.
pub mod ground_plane;

/// Bridge into the XR8 runtime hosted by the web page.
pub mod xr8_bridge;

pub use hit_test::{HitTestBackend, SurfaceHit, SurfaceHitTest, SurfaceType};
