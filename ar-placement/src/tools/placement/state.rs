use bevy::prelude::*;
use constants::interaction::{ROTATION_SENSITIVITY, TAP_SLOP};

/// Interaction state of one AR session.
///
/// `dragging` implies `placed`. `yaw` is in degrees, is unbounded, and is
/// only meaningful once `placed` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementState {
    pub placed: bool,
    pub dragging: bool,
    /// Normalized x of the previous drag sample.
    pub last_x: f32,
    pub yaw: f32,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    /// Degrees of yaw per full viewport width of horizontal drag.
    pub rotation_sensitivity: f32,
    /// Normalized travel under which a release still counts as a tap.
    pub tap_slop: f32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            rotation_sensitivity: ROTATION_SENSITIVITY,
            tap_slop: TAP_SLOP,
        }
    }
}

// Components
#[derive(Component)]
pub struct PlacementTarget;
#[derive(Component)]
pub struct StartScreen;
#[derive(Component)]
pub struct StartArButton;

/// Pointer intent in normalized viewport coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Tap(Vec2),
    DragStart(Vec2),
    DragMove(Vec2),
    DragEnd,
}

/// Emitted after the controller changed the target transform.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlacementChanged {
    Placed {
        first: bool,
        position: Vec3,
        rotation: Quat,
    },
    Rotated {
        yaw: f32,
    },
}
