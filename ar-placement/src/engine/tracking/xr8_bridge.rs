use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use super::hit_test::{SurfaceHit, SurfaceHitTest, SurfaceType};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("XR8 runtime is not available on this platform")]
    Unavailable,
    #[error("XR8 hit test threw: {0}")]
    Threw(String),
    #[error("XR8 hit test returned an undecodable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct WireVec3 {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Deserialize)]
struct WireQuat {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

#[derive(Deserialize)]
struct WireHit {
    #[serde(rename = "type")]
    surface: SurfaceType,
    position: WireVec3,
    rotation: WireQuat,
}

impl From<WireHit> for SurfaceHit {
    fn from(hit: WireHit) -> Self {
        let rotation = Quat::from_xyzw(hit.rotation.x, hit.rotation.y, hit.rotation.z, hit.rotation.w);
        let rotation = if rotation.length_squared() > f32::EPSILON {
            rotation.normalize()
        } else {
            Quat::IDENTITY
        };

        SurfaceHit::new(
            hit.surface,
            Vec3::new(hit.position.x, hit.position.y, hit.position.z),
            rotation,
        )
    }
}

/// Decode the JSON form of an `XrController.hitTest` result.
///
/// `null` is treated like an empty array. Extra fields such as `distance`
/// are ignored.
pub fn decode_hits(payload: &str) -> Result<Vec<SurfaceHit>, BridgeError> {
    let hits: Option<Vec<WireHit>> = serde_json::from_str(payload)?;
    Ok(hits
        .unwrap_or_default()
        .into_iter()
        .map(SurfaceHit::from)
        .collect())
}

/// Hit testing through the XR8 runtime of the hosting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Xr8HitTest;

impl Xr8HitTest {
    pub fn query(&self, point: Vec2) -> Result<Vec<SurfaceHit>, BridgeError> {
        platform::hit_test(point.x, point.y)
    }
}

impl SurfaceHitTest for Xr8HitTest {
    fn hit_test(&mut self, point: Vec2) -> Vec<SurfaceHit> {
        match self.query(point) {
            Ok(hits) => hits,
            Err(error) => {
                warn!("XR8 hit test at {:?} failed: {}", point, error);
                Vec::new()
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::{BridgeError, SurfaceHit, decode_hits};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["XR8", "XrController"], js_name = hitTest)]
        fn xr_controller_hit_test(x: f32, y: f32) -> Result<JsValue, JsValue>;
    }

    pub fn hit_test(x: f32, y: f32) -> Result<Vec<SurfaceHit>, BridgeError> {
        let value =
            xr_controller_hit_test(x, y).map_err(|e| BridgeError::Threw(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Vec::new());
        }

        let json = js_sys::JSON::stringify(&value)
            .map_err(|e| BridgeError::Threw(format!("{:?}", e)))?;
        decode_hits(&String::from(json))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::{BridgeError, SurfaceHit};

    pub fn hit_test(_x: f32, _y: f32) -> Result<Vec<SurfaceHit>, BridgeError> {
        Err(BridgeError::Unavailable)
    }
}
