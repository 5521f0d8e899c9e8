//! Camera-relative sampling window

use crate::core::types::DVec3;
use crate::field::config::CacheConfig;
use crate::math::Aabb;

/// The cells that must be cached for one camera position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWindow {
    /// Camera position plus the configured offsets
    pub bounds: Aabb,
    /// `bounds` pushed out by the offsets a second time; samples outside are evicted
    pub eviction_bounds: Aabb,
    cell_step: f64,
}

impl ViewportWindow {
    /// Window around `camera` for the given configuration
    pub fn around(camera: DVec3, config: &CacheConfig) -> Self {
        let bounds = Aabb::around(camera, config.min_offset, config.max_offset);
        Self {
            bounds,
            eviction_bounds: bounds.expanded_by(config.min_offset, config.max_offset),
            cell_step: config.cell_step,
        }
    }

    /// Grid spacing
    pub fn cell_step(&self) -> f64 {
        self.cell_step
    }

    /// Whether a sample at `position` has drifted far enough away to drop
    pub fn is_evictable(&self, position: DVec3) -> bool {
        !self.eviction_bounds.contains_point(position)
    }

    /// The cell owned by `corner`: `[corner, corner + step)` on every axis
    pub fn cell_box(&self, corner: DVec3) -> Aabb {
        Aabb::new(corner, corner + DVec3::splat(self.cell_step))
    }

    /// Number of cell corners along x, y and z
    pub fn cell_counts(&self) -> [usize; 3] {
        let min = self.bounds.min;
        let max = self.bounds.max;
        [
            axis_count(min.x, max.x, self.cell_step),
            axis_count(min.y, max.y, self.cell_step),
            axis_count(min.z, max.z, self.cell_step),
        ]
    }

    /// Every cell corner in the window, z varying fastest
    ///
    /// Each axis starts at `min` truncated toward zero onto the grid and
    /// advances by the step while still `<= max`.
    pub fn cell_corners(&self) -> impl Iterator<Item = DVec3> + use<> {
        let step = self.cell_step;
        let [nx, ny, nz] = self.cell_counts();
        let start = DVec3::new(
            grid_start(self.bounds.min.x, step),
            grid_start(self.bounds.min.y, step),
            grid_start(self.bounds.min.z, step),
        );
        (0..nx).flat_map(move |i| {
            (0..ny).flat_map(move |j| {
                (0..nz).map(move |k| {
                    start + DVec3::new(i as f64, j as f64, k as f64) * step
                })
            })
        })
    }
}

fn grid_start(min: f64, step: f64) -> f64 {
    (min / step).trunc() * step
}

fn axis_count(min: f64, max: f64, step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let start = grid_start(min, step);
    if start.is_nan() || max.is_nan() || start > max {
        return 0;
    }
    ((max - start) / step).floor() as usize + 1
}
