//! Tuning constants shared across the workspace.

pub mod interaction;
pub mod scene;
pub mod config;
