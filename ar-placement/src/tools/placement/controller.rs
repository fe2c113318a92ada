use bevy::prelude::*;

use super::selection::select_best_hit;
use super::state::{
    PlacementChanged, PlacementSettings, PlacementState, PlacementTarget, PointerAction,
};
use crate::engine::tracking::{HitTestBackend, SurfaceHitTest};

/// Mutable view of the placement target's transform and visibility.
pub struct TargetPose<'a> {
    pub transform: &'a mut Transform,
    pub visibility: &'a mut Visibility,
}

/// Yaw (rotation about +Y) of `rotation` in degrees.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

/// `rotation` with its yaw replaced, keeping pitch and roll.
pub fn with_yaw(rotation: Quat, yaw_degrees: f32) -> Quat {
    let (_, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_euler(EulerRot::YXZ, yaw_degrees.to_radians(), pitch, roll)
}

/// Session-scoped owner of the placement state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlacementController {
    state: PlacementState,
    sensitivity: f32,
}

impl PlacementController {
    pub fn new(settings: &PlacementSettings) -> Self {
        Self {
            state: PlacementState::default(),
            sensitivity: settings.rotation_sensitivity,
        }
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Dispatch one pointer action. Returns what changed on the target, if anything.
    pub fn apply<H: SurfaceHitTest + ?Sized>(
        &mut self,
        action: PointerAction,
        hit_test: &mut H,
        target: &mut TargetPose<'_>,
    ) -> Option<PlacementChanged> {
        match action {
            PointerAction::Tap(point) => self.place(hit_test, target, point),
            PointerAction::DragStart(point) => {
                self.on_drag_start(point);
                None
            }
            PointerAction::DragMove(point) => self.on_drag_move(hit_test, target, point),
            PointerAction::DragEnd => {
                self.on_drag_end();
                None
            }
        }
    }

    /// Hit-test at `point` and move the target onto the best hit.
    ///
    /// Returns false, touching nothing, when no surface is under the point.
    pub fn try_place<H: SurfaceHitTest + ?Sized>(
        &mut self,
        hit_test: &mut H,
        target: &mut TargetPose<'_>,
        point: Vec2,
    ) -> bool {
        self.place(hit_test, target, point).is_some()
    }

    /// Initial placement and re-placement alike.
    pub fn on_tap<H: SurfaceHitTest + ?Sized>(
        &mut self,
        hit_test: &mut H,
        target: &mut TargetPose<'_>,
        point: Vec2,
    ) -> bool {
        self.try_place(hit_test, target, point)
    }

    pub fn on_drag_start(&mut self, point: Vec2) {
        if !self.state.placed {
            return;
        }
        self.state.dragging = true;
        self.state.last_x = point.x;
    }

    /// Preview placement while unplaced, yaw rotation while dragging.
    pub fn on_drag_move<H: SurfaceHitTest + ?Sized>(
        &mut self,
        hit_test: &mut H,
        target: &mut TargetPose<'_>,
        point: Vec2,
    ) -> Option<PlacementChanged> {
        if !self.state.placed {
            return self.place(hit_test, target, point);
        }
        if !self.state.dragging {
            return None;
        }

        let dx = point.x - self.state.last_x;
        self.state.last_x = point.x;
        self.state.yaw += dx * self.sensitivity;

        target.transform.rotation = with_yaw(target.transform.rotation, self.state.yaw);
        Some(PlacementChanged::Rotated {
            yaw: self.state.yaw,
        })
    }

    pub fn on_drag_end(&mut self) {
        self.state.dragging = false;
    }

    fn place<H: SurfaceHitTest + ?Sized>(
        &mut self,
        hit_test: &mut H,
        target: &mut TargetPose<'_>,
        point: Vec2,
    ) -> Option<PlacementChanged> {
        let hits = hit_test.hit_test(point);
        let Some(hit) = select_best_hit(&hits) else {
            debug!("No surface under {:?}", point);
            return None;
        };

        *target.visibility = Visibility::Visible;
        target.transform.translation = hit.position;
        target.transform.rotation = hit.rotation;

        let first = !self.state.placed;
        if first {
            self.state.placed = true;
            self.state.yaw = yaw_degrees(target.transform.rotation);
            info!(
                "Target placed on {:?} at {:?} (yaw baseline {:.1}°)",
                hit.surface, hit.position, self.state.yaw
            );
        }

        Some(PlacementChanged::Placed {
            first,
            position: hit.position,
            rotation: hit.rotation,
        })
    }
}

// Runs only while the session is live; the controller resource comes and goes with it.
pub fn apply_pointer_actions(
    mut actions: EventReader<PointerAction>,
    controller: Option<ResMut<PlacementController>>,
    mut hit_test: ResMut<HitTestBackend>,
    mut targets: Query<(&mut Transform, &mut Visibility), With<PlacementTarget>>,
    mut changes: EventWriter<PlacementChanged>,
) {
    let Some(mut controller) = controller else {
        actions.clear();
        return;
    };
    let Ok((mut transform, mut visibility)) = targets.single_mut() else {
        actions.clear();
        return;
    };

    for action in actions.read() {
        let mut target = TargetPose {
            transform: &mut *transform,
            visibility: &mut *visibility,
        };
        if let Some(change) = controller.apply(*action, &mut *hit_test, &mut target) {
            changes.write(change);
        }
    }
}
