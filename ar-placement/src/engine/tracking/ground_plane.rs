use bevy::prelude::*;
use constants::interaction::PARALLEL_RAY_EPSILON;

use super::hit_test::{HitTestBackend, SurfaceHit, SurfaceHitTest, SurfaceType};
use crate::engine::camera::TrackedCamera;

/// Scene camera state captured for viewport ray casting.
#[derive(Debug, Clone)]
pub struct CameraSnapshot {
    pub camera: Camera,
    pub transform: GlobalTransform,
}

impl CameraSnapshot {
    /// World-space ray through a normalized point of the camera's viewport
    /// (origin top-left). `None` until the camera has a computed viewport.
    pub fn ray_through(&self, point: Vec2) -> Option<Ray3d> {
        let viewport = self.camera.logical_viewport_rect()?;
        let position = viewport.min + point * viewport.size();
        self.camera.viewport_to_world(&self.transform, position).ok()
    }
}

/// Treats the world as a single horizontal surface at `plane_height`.
#[derive(Debug, Clone, Default)]
pub struct GroundPlaneHitTest {
    pub plane_height: f32,
    camera: Option<CameraSnapshot>,
}

impl GroundPlaneHitTest {
    pub fn new(plane_height: f32) -> Self {
        Self {
            plane_height,
            camera: None,
        }
    }

    pub fn set_camera(&mut self, snapshot: CameraSnapshot) {
        self.camera = Some(snapshot);
    }

    fn flat_plane_intersection(&self, ray: &Ray3d) -> Option<Vec3> {
        if ray.direction.y.abs() < PARALLEL_RAY_EPSILON {
            return None;
        }

        let t = (self.plane_height - ray.origin.y) / ray.direction.y;
        if t > 0.0 {
            Some(ray.origin + ray.direction * t)
        } else {
            None
        }
    }
}

impl SurfaceHitTest for GroundPlaneHitTest {
    fn hit_test(&mut self, point: Vec2) -> Vec<SurfaceHit> {
        let Some(ray) = self.camera.as_ref().and_then(|c| c.ray_through(point)) else {
            return Vec::new();
        };

        self.flat_plane_intersection(&ray)
            .map(|position| SurfaceHit::new(SurfaceType::EstimatedSurface, position, Quat::IDENTITY))
            .into_iter()
            .collect()
    }
}

/// Refreshes the ground plane's camera snapshot from the tracked scene camera.
pub fn sync_ground_plane_camera(
    mut backend: ResMut<HitTestBackend>,
    cameras: Query<(&Camera, &GlobalTransform), With<TrackedCamera>>,
) {
    let HitTestBackend::GroundPlane(ground) = &mut *backend else {
        return;
    };
    let Ok((camera, transform)) = cameras.single() else {
        return;
    };

    ground.set_camera(CameraSnapshot {
        camera: camera.clone(),
        transform: *transform,
    });
}

/// Perspective camera with computed values filled in, as the render world
/// would leave them after a frame.
#[cfg(test)]
pub(crate) fn computed_camera(fov_degrees: f32, size: UVec2) -> Camera {
    use bevy::render::camera::{CameraProjection, RenderTargetInfo};

    let projection = PerspectiveProjection {
        fov: fov_degrees.to_radians(),
        aspect_ratio: size.x as f32 / size.y as f32,
        ..default()
    };

    let mut camera = Camera::default();
    camera.computed.clip_from_view = projection.get_clip_from_view();
    camera.computed.target_info = Some(RenderTargetInfo {
        physical_size: size,
        scale_factor: 1.0,
    });
    camera
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_with_camera(plane_height: f32, transform: Transform) -> GroundPlaneHitTest {
        let mut plane = GroundPlaneHitTest::new(plane_height);
        plane.set_camera(CameraSnapshot {
            camera: computed_camera(60.0, UVec2::new(800, 800)),
            transform: GlobalTransform::from(transform),
        });
        plane
    }

    #[test]
    fn downward_camera_hits_directly_below() {
        let mut plane = plane_with_camera(
            0.0,
            Transform::from_xyz(1.0, 2.0, -3.0).looking_at(Vec3::new(1.0, 0.0, -3.0), Vec3::NEG_Z),
        );

        let hits = plane.hit_test(Vec2::splat(0.5));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surface, SurfaceType::EstimatedSurface);
        assert_eq!(hits[0].rotation, Quat::IDENTITY);
        assert!(hits[0].position.distance(Vec3::new(1.0, 0.0, -3.0)) < 1e-3);
    }

    #[test]
    fn level_camera_hits_ahead_at_bottom_edge() {
        let mut plane = plane_with_camera(0.0, Transform::from_xyz(0.0, 1.6, 0.0));

        let hits = plane.hit_test(Vec2::new(0.5, 1.0));

        assert_eq!(hits.len(), 1);
        let expected_z = -1.6 / 30f32.to_radians().tan();
        assert!(hits[0].position.y.abs() < 1e-3);
        assert!((hits[0].position.z - expected_z).abs() < 1e-2);
    }

    #[test]
    fn rays_above_horizon_or_parallel_miss() {
        let mut plane = plane_with_camera(0.0, Transform::from_xyz(0.0, 1.6, 0.0));

        assert!(plane.hit_test(Vec2::new(0.5, 0.0)).is_empty());
        assert!(plane.hit_test(Vec2::splat(0.5)).is_empty());
    }

    #[test]
    fn plane_above_camera_is_hit_looking_up() {
        let mut plane = plane_with_camera(3.0, Transform::from_xyz(0.0, 1.0, 0.0));

        let hits = plane.hit_test(Vec2::new(0.5, 0.0));
        assert_eq!(hits.len(), 1);
        assert!((hits[0].position.y - 3.0).abs() < 1e-3);
    }

    #[test]
    fn camera_without_viewport_yields_no_hits() {
        let mut plane = GroundPlaneHitTest::new(0.0);
        plane.set_camera(CameraSnapshot {
            camera: Camera::default(),
            transform: GlobalTransform::from_xyz(0.0, 2.0, 0.0),
        });

        assert!(plane.hit_test(Vec2::splat(0.5)).is_empty());
    }

    #[test]
    fn sub_viewport_rays_use_the_viewport_rect() {
        use bevy::render::camera::Viewport;

        let transform = Transform::from_xyz(0.0, 2.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut camera = computed_camera(60.0, UVec2::new(800, 800));
        camera.viewport = Some(Viewport {
            physical_position: UVec2::new(400, 0),
            physical_size: UVec2::new(400, 400),
            ..default()
        });

        let mut plane = GroundPlaneHitTest::new(0.0);
        plane.set_camera(CameraSnapshot {
            camera,
            transform: GlobalTransform::from(transform),
        });

        // Centre of the sub-viewport still maps to the optical axis.
        let hits = plane.hit_test(Vec2::splat(0.5));
        assert_eq!(hits.len(), 1);
        assert!(hits[0].position.distance(Vec3::ZERO) < 1e-3);
    }
}
