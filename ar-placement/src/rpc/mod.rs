//! JSON-RPC 2.0 communication layer for the hosting web page.
//!
//! The AR runtime (XR8) lives in the page's JavaScript. The page embeds the
//! Bevy canvas and talks to it through `postMessage`, using standard
//! JSON-RPC 2.0 framing.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (XR8)        <──postMessage──>  Bevy (wasm)
//!        │                                        │
//!        ├─ start_session ──────────────────────> │ ArSession::Running
//!        ├─ camera_pose (every tracked frame) ──> │ TrackedCamera transform
//!        ├─ pointer (optional host-owned input) ─> │ PointerAction
//!        │ <──────────────── object_placed ───────┤
//!        │ <──────────────── object_rotated ──────┤
//!        ├─ end_session ────────────────────────> │ ArSession::Idle
//! ```
//!
//! ## Methods
//!
//! - `start_session` / `end_session`: enter or leave the tracked session.
//! - `get_placement_state`: placed/dragging flags, yaw and target pose.
//! - `pointer`: `{ action, x, y }` with normalized coordinates.
//! - `camera_pose`: `{ position: {x,y,z}, rotation: {x,y,z,w} }`.
//!
//! Requests carrying an `id` are answered; notifications are not.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request parsing, command dispatch, notifications, and the WASM message listener.
pub mod web_rpc;
