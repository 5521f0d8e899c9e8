//! Field cache configuration

use serde::{Deserialize, Serialize};

use crate::core::types::DVec3;

/// Window and grid parameters for the field cache
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Offset from the camera to the window's min corner
    pub min_offset: DVec3,
    /// Offset from the camera to the window's max corner
    pub max_offset: DVec3,
    /// Grid spacing between sampled cell corners
    pub cell_step: f64,
    /// Slots reserved for samples up front
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            min_offset: DVec3::splat(-48.0),
            max_offset: DVec3::splat(48.0),
            cell_step: 8.0,
            initial_capacity: 2048,
        }
    }
}

impl CacheConfig {
    /// Symmetric window of `half_extent` on every axis
    pub fn symmetric(half_extent: f64, cell_step: f64) -> Self {
        Self {
            min_offset: DVec3::splat(-half_extent),
            max_offset: DVec3::splat(half_extent),
            cell_step,
            ..Default::default()
        }
    }
}
