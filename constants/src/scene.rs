/// Uniform scale of the placeable cube.
pub const TARGET_SCALE: f32 = 0.3;

/// Base colour of the placeable cube (linear-ish sRGB components).
pub const TARGET_COLOUR: [f32; 3] = [0.2, 0.7, 1.0];

/// Surface gloss of the cube material, converted to roughness as `1.0 - gloss`.
pub const TARGET_GLOSS: f32 = 0.6;

/// Vertical field of view of the AR camera in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Resting pose of the camera before the tracker pushes its first pose.
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 1.6, 0.0];

/// Downward tilt of the resting camera in degrees.
pub const CAMERA_START_PITCH_DEGREES: f32 = -30.0;

/// Directional light orientation as XYZ Euler angles in degrees.
pub const LIGHT_EULER_DEGREES: [f32; 3] = [45.0, 30.0, 0.0];

/// Directional light illuminance in lux.
pub const LIGHT_ILLUMINANCE: f32 = 12_000.0;

/// Height of the fallback ground plane used when no AR runtime is present.
pub const GROUND_PLANE_HEIGHT: f32 = 0.0;
