//! Tap-to-place / drag-to-rotate interaction layer.
//!
//! ## Architecture
//!
//! `PlacementController` is a resource that only exists while the AR
//! session is running. It owns the `PlacementState` (placed, dragging,
//! drag reference and accumulated yaw) and turns each `PointerAction` into
//! absolute transform writes on the single `PlacementTarget` entity.
//!
//! ### Before first placement
//! - Moves continuously re-query the surface under the pointer and move the
//!   target there
//! - Drag starts are ignored
//!
//! ### After first placement
//! - Taps re-place the target at the new surface pose
//! - Drags rotate the target: a drag across the full viewport width adds
//!   `rotation_sensitivity` degrees (180 by default) of yaw
//!
//! A query with no hits never changes state or the target transform, and
//! the controller never hides the target once shown.
//!
//! ### Taps versus drag releases
//! A release only becomes a `Tap` when the pointer travelled no further than
//! `tap_slop` since the press. Releasing at the end of a rotation drag
//! therefore leaves the target where it is instead of re-placing it under
//! the pointer.

/// Placement controller operations over state, hit testing and the target.
pub mod controller;

/// Raw window input to normalized pointer action translation.
pub mod input;

/// Start screen button handling (native only).
pub mod interactions;

/// Attach and detach of the controller with the AR session.
pub mod lifecycle;

/// Priority selection among candidate surface hits.
pub mod selection;

/// State, settings, components and events of the placement tool.
pub mod state;

/// Start screen spawning (native only).
pub mod ui;

use bevy::prelude::*;
use bevy::window::WindowEvent;

use crate::engine::core::app_state::{ArSession, SessionRequest, handle_session_requests};
use crate::engine::tracking::HitTestBackend;
use crate::engine::tracking::ground_plane::sync_ground_plane_camera;

pub use controller::{PlacementController, TargetPose};
pub use input::{PointerTracker, normalize};
pub use selection::select_best_hit;
pub use state::{
    PlacementChanged, PlacementSettings, PlacementState, PlacementTarget, PointerAction,
};

use controller::apply_pointer_actions;
use input::collect_pointer_actions;
use lifecycle::{begin_placement_session, end_placement_session};

// Registers the placement tool, its session-scoped systems and the start screen.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app
            // init resources
            .init_resource::<PlacementSettings>()
            .init_resource::<PointerTracker>()
            .init_resource::<HitTestBackend>()
            .add_event::<WindowEvent>()
            .add_event::<PointerAction>()
            .add_event::<PlacementChanged>()
            .add_event::<SessionRequest>()
            .add_systems(OnEnter(ArSession::Running), begin_placement_session)
            .add_systems(OnExit(ArSession::Running), end_placement_session)
            .add_systems(Update, handle_session_requests)
            .add_systems(
                Update,
                (
                    sync_ground_plane_camera,
                    collect_pointer_actions,
                    apply_pointer_actions,
                )
                    .chain()
                    .run_if(in_state(ArSession::Running)),
            );

        // Start screen only for native builds, the host page owns it on the web.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(OnEnter(ArSession::Idle), ui::spawn_start_screen)
                .add_systems(
                    Update,
                    interactions::start_button_interaction.run_if(in_state(ArSession::Idle)),
                );
        }
    }
}
