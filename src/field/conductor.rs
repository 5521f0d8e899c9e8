//! Static current-carrying conductors

use serde::{Deserialize, Serialize};

use crate::core::types::DVec3;
use crate::physics::magnetic_field_point;

/// Permeability used by the default scene
pub const DEFAULT_PERMEABILITY: f64 = 2.5e-1;

/// A straight current segment contributing to the field
///
/// Parameters are taken as-is; nothing is validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conductor {
    /// Start of the segment
    pub position: DVec3,
    /// Current in amperes
    pub current: f64,
    /// Magnetic permeability of the surrounding medium
    pub permeability: f64,
    /// Segment vector from `position` to the far end
    pub segment: DVec3,
}

impl Conductor {
    /// Create a new conductor
    pub fn new(position: DVec3, current: f64, permeability: f64, segment: DVec3) -> Self {
        Self {
            position,
            current,
            permeability,
            segment,
        }
    }

    /// Field contribution of this conductor at world position `point`
    pub fn field_at(&self, point: DVec3) -> DVec3 {
        magnetic_field_point(self.current, self.permeability, self.segment, point - self.position)
    }

    /// Far end of the segment
    pub fn end(&self) -> DVec3 {
        self.position + self.segment
    }
}

/// The four conductors of the stock scene
pub fn default_conductors() -> Vec<Conductor> {
    vec![
        Conductor::new(DVec3::new(12.0, -12.0, -12.0), 6000.0, DEFAULT_PERMEABILITY, DVec3::new(4.0, 0.6, 0.6)),
        Conductor::new(DVec3::new(12.0, 12.0, -12.0), 3000.0, DEFAULT_PERMEABILITY, DVec3::new(4.0, 0.4, 0.4)),
        Conductor::new(DVec3::new(12.0, 12.0, 12.0), 9000.0, DEFAULT_PERMEABILITY, DVec3::new(4.0, 0.9, 0.9)),
        Conductor::new(DVec3::new(12.0, -12.0, 12.0), 1000.0, DEFAULT_PERMEABILITY, DVec3::new(4.0, 0.3, 0.3)),
    ]
}
