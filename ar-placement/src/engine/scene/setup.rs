use bevy::prelude::*;
use constants::scene::{
    CAMERA_FOV_DEGREES, CAMERA_START_PITCH_DEGREES, CAMERA_START_POSITION, LIGHT_EULER_DEGREES,
    LIGHT_ILLUMINANCE, TARGET_COLOUR, TARGET_GLOSS, TARGET_SCALE,
};

use crate::engine::camera::TrackedCamera;
use crate::tools::placement::PlacementTarget;

/// Parent of everything the user can place.
#[derive(Component)]
pub struct SceneRoot;

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("Spawning AR scene (camera, light, hidden target)");

    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_placement_target(&mut commands, &mut meshes, &mut materials);
}

// Transparent clear so the camera feed shows through
fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        camera_start_transform(),
        TrackedCamera,
        Name::new("Camera"),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    let [x, y, z] = LIGHT_EULER_DEGREES.map(f32::to_radians);
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z)),
        Name::new("Light"),
    ));
}

fn spawn_placement_target(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = meshes.add(Cuboid::default());
    let material = materials.add(target_material());

    commands
        .spawn((
            SceneRoot,
            Transform::IDENTITY,
            Visibility::default(),
            Name::new("Root"),
        ))
        .with_children(|root| {
            // Stays hidden until the first successful placement
            root.spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_scale(Vec3::splat(TARGET_SCALE)),
                Visibility::Hidden,
                PlacementTarget,
                Name::new("Cube"),
            ));
        });
}

/// Resting camera pose used until the tracker reports one.
pub fn camera_start_transform() -> Transform {
    Transform::from_translation(Vec3::from_array(CAMERA_START_POSITION))
        .with_rotation(Quat::from_rotation_x(CAMERA_START_PITCH_DEGREES.to_radians()))
}

pub fn target_material() -> StandardMaterial {
    let [r, g, b] = TARGET_COLOUR;
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 1.0 - TARGET_GLOSS,
        metallic: 0.0,
        ..default()
    }
}
