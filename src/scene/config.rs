//! Scene configuration: conductors, cache window, camera and scheduling

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::camera::Camera;
use crate::core::types::Result;
use crate::field::{CacheConfig, Conductor, default_conductors};
use crate::schedule::WorkerConfig;

/// Frame period of the render schedule (60 FPS)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 1000 / 60;

/// Configuration for a field scene
///
/// Every field is optional in JSON; missing ones fall back to the stock scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Conductors, fixed for the whole run
    pub conductors: Vec<Conductor>,
    /// Sampling window and grid
    pub cache: CacheConfig,
    /// Initial camera
    pub camera: Camera,
    /// Update worker settings
    pub worker: WorkerConfig,
    /// Period between frames (and update requests) in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            conductors: default_conductors(),
            cache: CacheConfig::default(),
            camera: Camera::default(),
            worker: WorkerConfig::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl SceneConfig {
    /// Parse a scene from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {}: {} conductors",
            path.display(),
            scene.conductors.len()
        );
        Ok(scene)
    }
}
