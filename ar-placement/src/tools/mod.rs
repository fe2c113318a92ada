//! Interactive tools driven by pointer input.
//!
//! ## Placement Tool
//!
//! - **Activation**: attached when the AR session enters `Running`, detached
//!   when it leaves.
//! - **Purpose**: place the target object on a tracked surface and rotate it.
//! - **Workflow**:
//!   1. Before the first placement, pointer moves preview the object on the
//!      surface under the pointer
//!   2. Tap or click places the object at the best surface hit
//!   3. Horizontal drag rotates the placed object about the vertical axis
//!   4. Further taps re-place the object on a new surface
//!
//! ```text
//! WindowEvent (cursor / mouse / touch)     RPC `pointer`
//!   └─> collect_pointer_actions()               │
//!       └─> PointerAction ◄───────────────────┘
//!           └─> apply_pointer_actions()
//!               ├─> SurfaceHitTest (XR8 or ground plane)
//!               ├─> Target Transform / Visibility
//!               └─> PlacementChanged ─> RPC notifications
//! ```

/// Tap-to-place and drag-to-rotate placement tool.
///
/// Pointer normalization, hit selection, the placement controller and its session lifecycle.
pub mod placement;
