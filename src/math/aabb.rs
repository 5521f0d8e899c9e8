//! Axis-aligned bounding box

use crate::core::types::DVec3;

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create the box spanning `origin + min_offset` to `origin + max_offset`
    pub fn around(origin: DVec3, min_offset: DVec3, max_offset: DVec3) -> Self {
        Self {
            min: origin + min_offset,
            max: origin + max_offset,
        }
    }

    /// Get center point
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Check if point is inside AABB, both faces inclusive
    pub fn contains_point(&self, p: DVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if point is inside `[min, max)` on every axis
    pub fn contains_point_half_open(&self, p: DVec3) -> bool {
        p.x >= self.min.x && p.x < self.max.x &&
        p.y >= self.min.y && p.y < self.max.y &&
        p.z >= self.min.z && p.z < self.max.z
    }

    /// Return a copy with both corners pushed outward by the given offsets
    ///
    /// `min_offset` is added to `min`, `max_offset` to `max`.
    pub fn expanded_by(&self, min_offset: DVec3, max_offset: DVec3) -> Aabb {
        Aabb {
            min: self.min + min_offset,
            max: self.max + max_offset,
        }
    }
}
