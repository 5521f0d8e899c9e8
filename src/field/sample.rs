//! Cached field samples

use crate::core::types::DVec3;
use crate::field::conductor::Conductor;

/// Samples with a squared field length below this are not worth drawing
pub const DRAW_THRESHOLD_SQ: f64 = 0.001;

/// One evaluated field vector at a grid cell corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    /// Cell corner, snapped to the grid step
    pub position: DVec3,
    /// Superposed field of every conductor at `position`
    pub direction: DVec3,
}

impl FieldSample {
    /// Evaluate the superposed field of `conductors` at `position`
    pub fn compute(position: DVec3, conductors: &[Conductor]) -> Self {
        let direction = conductors
            .iter()
            .fold(DVec3::ZERO, |sum, conductor| sum + conductor.field_at(position));
        Self { position, direction }
    }

    /// Tip of the field vector when drawn from `position`
    pub fn tip(&self) -> DVec3 {
        self.position + self.direction
    }

    /// Whether the vector is long enough to draw
    pub fn is_drawable(&self) -> bool {
        self.direction.length_squared() >= DRAW_THRESHOLD_SQ
    }
}
