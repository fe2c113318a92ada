/// Asset path of the runtime configuration, relative to the asset root.
pub const CONFIG_ASSET_PATH: &str = "config/ar_placement.config.json";

/// Extension claimed by the JSON config loader.
pub const CONFIG_ASSET_EXTENSION: &str = "config.json";

/// CSS selector of the canvas the app renders into on web builds.
pub const CANVAS_SELECTOR: &str = "#bevy";
