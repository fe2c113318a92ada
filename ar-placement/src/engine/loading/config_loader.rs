use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::config::{CONFIG_ASSET_EXTENSION, CONFIG_ASSET_PATH};
use serde::Deserialize;

use crate::engine::tracking::HitTestBackend;
use crate::tools::placement::{PlacementController, PlacementSettings, PlacementTarget};

/// Optional overrides read from `ar_placement.config.json`.
#[derive(Asset, TypePath, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ArConfig {
    pub rotation_sensitivity: Option<f32>,
    pub tap_slop: Option<f32>,
    pub target_scale: Option<f32>,
    pub plane_height: Option<f32>,
}

impl ArConfig {
    pub fn apply_to_settings(&self, settings: &mut PlacementSettings) {
        if let Some(sensitivity) = self.rotation_sensitivity.filter(|v| v.is_finite()) {
            settings.rotation_sensitivity = sensitivity;
        }
        if let Some(slop) = self.tap_slop.filter(|v| v.is_finite() && *v >= 0.0) {
            settings.tap_slop = slop;
        }
    }

    pub fn apply_to_backend(&self, backend: &mut HitTestBackend) {
        if let (HitTestBackend::GroundPlane(ground), Some(height)) = (backend, self.plane_height) {
            ground.plane_height = height;
        }
    }
}

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ArConfig>>,
    applied: bool,
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<ArConfig>::new(&[CONFIG_ASSET_EXTENSION]))
            .init_resource::<ConfigLoader>()
            .add_systems(Startup, start_config_loading)
            .add_systems(Update, apply_loaded_config);
    }
}

pub fn start_config_loading(mut loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    debug!("Loading AR config from {}", CONFIG_ASSET_PATH);
    loader.handle = Some(asset_server.load(CONFIG_ASSET_PATH));
}

pub fn apply_loaded_config(
    mut loader: ResMut<ConfigLoader>,
    configs: Res<Assets<ArConfig>>,
    mut settings: ResMut<PlacementSettings>,
    mut backend: ResMut<HitTestBackend>,
    controller: Option<ResMut<PlacementController>>,
    mut targets: Query<&mut Transform, With<PlacementTarget>>,
) {
    if loader.applied {
        return;
    }
    let Some(config) = loader.handle.as_ref().and_then(|h| configs.get(h)) else {
        return;
    };

    config.apply_to_settings(&mut settings);
    config.apply_to_backend(&mut backend);

    if let Some(mut controller) = controller {
        controller.set_sensitivity(settings.rotation_sensitivity);
    }

    if let Some(scale) = config.target_scale.filter(|s| s.is_finite() && *s > 0.0) {
        for mut transform in &mut targets {
            transform.scale = Vec3::splat(scale);
        }
    }

    info!(
        "✓ AR config applied (sensitivity {}, tap slop {}, backend {})",
        settings.rotation_sensitivity,
        settings.tap_slop,
        backend.name()
    );
    loader.applied = true;
}
