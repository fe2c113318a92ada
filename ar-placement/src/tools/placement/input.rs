use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowEvent};

use super::state::{PlacementSettings, PointerAction};

/// Map a viewport pixel position into [0, 1]² (origin top-left).
///
/// Out-of-bounds input clamps to the edges. Degenerate viewports and NaN
/// never escape the unit square.
pub fn normalize(position: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        clamp01(position.x / viewport.x),
        clamp01(position.y / viewport.y),
    )
}

fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Pointer-relevant subset of window input, still in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointer {
    CursorMoved(Vec2),
    MousePressed,
    MouseReleased,
    Touch {
        id: u64,
        phase: TouchPhase,
        position: Vec2,
    },
}

impl RawPointer {
    /// Extract the pointer event and its window from a window event.
    pub fn from_window_event(event: &WindowEvent) -> Option<(Entity, Self)> {
        match event {
            WindowEvent::CursorMoved(CursorMoved {
                window, position, ..
            }) => Some((*window, Self::CursorMoved(*position))),
            WindowEvent::MouseButtonInput(MouseButtonInput {
                button: MouseButton::Left,
                state,
                window,
                ..
            }) => Some((
                *window,
                match state {
                    ButtonState::Pressed => Self::MousePressed,
                    ButtonState::Released => Self::MouseReleased,
                },
            )),
            WindowEvent::TouchInput(TouchInput {
                phase,
                position,
                window,
                id,
                ..
            }) => Some((
                *window,
                Self::Touch {
                    id: *id,
                    phase: *phase,
                    position: *position,
                },
            )),
            _ => None,
        }
    }
}

/// Tracks cursor, press origin and the primary touch between window events.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    press_origin: Option<Vec2>,
    primary_touch: Option<u64>,
}

impl PointerTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Translate one raw event into zero or more pointer actions.
    ///
    /// Releases emit `DragEnd` and then, if the pointer travelled no further
    /// than `tap_slop` since the press, a `Tap`. Only the first touch to go
    /// down is followed until it lifts.
    pub fn handle(
        &mut self,
        raw: RawPointer,
        viewport: Vec2,
        tap_slop: f32,
        out: &mut Vec<PointerAction>,
    ) {
        match raw {
            RawPointer::CursorMoved(position) => {
                let point = normalize(position, viewport);
                self.cursor = Some(point);
                out.push(PointerAction::DragMove(point));
            }
            RawPointer::MousePressed => {
                let Some(point) = self.cursor else {
                    return;
                };
                self.press_origin = Some(point);
                out.push(PointerAction::DragStart(point));
            }
            RawPointer::MouseReleased => {
                out.push(PointerAction::DragEnd);
                if let (Some(origin), Some(point)) = (self.press_origin.take(), self.cursor) {
                    push_tap_within_slop(origin, point, tap_slop, out);
                }
            }
            RawPointer::Touch {
                id,
                phase,
                position,
            } => self.handle_touch(id, phase, normalize(position, viewport), tap_slop, out),
        }
    }

    fn handle_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        point: Vec2,
        tap_slop: f32,
        out: &mut Vec<PointerAction>,
    ) {
        if phase == TouchPhase::Started {
            if self.primary_touch.is_some() {
                return;
            }
            self.primary_touch = Some(id);
            self.press_origin = Some(point);
            out.push(PointerAction::DragStart(point));
            return;
        }

        if self.primary_touch != Some(id) {
            return;
        }

        match phase {
            TouchPhase::Moved => out.push(PointerAction::DragMove(point)),
            TouchPhase::Ended => {
                self.primary_touch = None;
                out.push(PointerAction::DragEnd);
                if let Some(origin) = self.press_origin.take() {
                    push_tap_within_slop(origin, point, tap_slop, out);
                }
            }
            TouchPhase::Canceled => {
                self.primary_touch = None;
                self.press_origin = None;
                out.push(PointerAction::DragEnd);
            }
            TouchPhase::Started => {}
        }
    }
}

fn push_tap_within_slop(origin: Vec2, point: Vec2, tap_slop: f32, out: &mut Vec<PointerAction>) {
    if origin.distance(point) <= tap_slop {
        out.push(PointerAction::Tap(point));
    }
}

// Reads the ordered window event stream so mouse, cursor and touch keep host order.
pub fn collect_pointer_actions(
    mut events: EventReader<WindowEvent>,
    windows: Query<&Window>,
    settings: Res<PlacementSettings>,
    mut tracker: ResMut<PointerTracker>,
    mut actions: EventWriter<PointerAction>,
) {
    let mut pending = Vec::new();

    for event in events.read() {
        let Some((window_entity, raw)) = RawPointer::from_window_event(event) else {
            continue;
        };
        let Ok(window) = windows.get(window_entity) else {
            continue;
        };

        let viewport = Vec2::new(window.width(), window.height());
        tracker.handle(raw, viewport, settings.tap_slop, &mut pending);
    }

    if !pending.is_empty() {
        actions.write_batch(pending);
    }
}
