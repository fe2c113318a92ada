use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use crate::engine::camera::TrackedCameraPlugin;
use crate::engine::core::app_state::ArSession;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::ConfigPlugin;
use crate::engine::scene::spawn_scene;
use crate::engine::tracking::HitTestBackend;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::placement::PlacementPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<ArSession>()
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(HitTestBackend::for_platform())
        .add_plugins(TrackedCameraPlugin)
        .add_plugins(ConfigPlugin)
        .add_plugins(WebRpcPlugin);

    // Plugin for tap-to-place and drag-to-rotate
    app.add_plugins(PlacementPlugin);

    app.add_systems(Startup, spawn_scene);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: "wgpu=error,naga=warn,ar_placement=debug".into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
