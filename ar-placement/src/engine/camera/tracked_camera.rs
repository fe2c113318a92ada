use bevy::prelude::*;

/// Marker for the camera whose pose follows the device.
#[derive(Component)]
pub struct TrackedCamera;

/// Camera pose reported by the AR runtime for the current frame.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraPoseUpdate {
    pub position: Vec3,
    pub rotation: Quat,
}

pub struct TrackedCameraPlugin;

impl Plugin for TrackedCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CameraPoseUpdate>()
            .add_systems(Update, apply_camera_pose);
    }
}

// Only the newest pose of the frame matters
pub fn apply_camera_pose(
    mut updates: EventReader<CameraPoseUpdate>,
    mut cameras: Query<&mut Transform, With<TrackedCamera>>,
) {
    let Some(latest) = updates.read().last().copied() else {
        return;
    };

    for mut transform in &mut cameras {
        transform.translation = latest.position;
        transform.rotation = latest.rotation;
    }
}
