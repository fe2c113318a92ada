/// Degrees of yaw applied for a drag spanning the full viewport width.
pub const ROTATION_SENSITIVITY: f32 = 180.0;

/// Maximum normalized pointer travel between press and release for the release to count as a tap.
pub const TAP_SLOP: f32 = 0.02;

/// Rays closer to parallel than this never intersect the ground plane.
pub const PARALLEL_RAY_EPSILON: f32 = 1.0e-3;
