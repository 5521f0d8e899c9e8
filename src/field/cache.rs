//! Field cache - camera-relative working set of field samples
//!
//! Each tick runs two passes against the window around the camera:
//! 1. Eviction: drop samples outside the doubly-offset eviction bounds
//! 2. Fill: compute a sample for every window cell that has none yet
//!
//! The sample container sits behind a single mutex that is taken once per
//! container operation (one `get`, `append` or `destroy`), never for a whole
//! pass. Readers can therefore run between the updater's steps and may see an
//! evicted but not yet refilled window. Conductors are immutable after
//! construction and need no lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::collections::DynamicArray;
use crate::core::types::{DVec3, Result};
use crate::field::config::CacheConfig;
use crate::field::conductor::Conductor;
use crate::field::sample::FieldSample;
use crate::field::window::ViewportWindow;
use crate::math::Aabb;

/// Outcome of one refresh tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Samples dropped by the eviction pass
    pub evicted: usize,
    /// Window cells that already had a sample
    pub reused: usize,
    /// Window cells evaluated and appended
    pub computed: usize,
    /// Samples resident after the tick
    pub resident: usize,
}

/// Copy of the cache contents for one frame
pub struct RenderSnapshot<'a> {
    /// Samples in container order
    pub samples: Vec<FieldSample>,
    /// The static conductor roster
    pub conductors: &'a [Conductor],
}

impl RenderSnapshot<'_> {
    /// Samples whose field is long enough to draw
    pub fn drawable(&self) -> impl Iterator<Item = &FieldSample> {
        self.samples.iter().filter(|sample| sample.is_drawable())
    }
}

/// Shared cache of field samples around a moving camera
pub struct FieldCache {
    /// Resident samples, guarded per operation
    samples: Mutex<DynamicArray<FieldSample>>,
    /// Read-only after construction
    conductors: Vec<Conductor>,
    config: CacheConfig,
}

impl FieldCache {
    /// Create an empty cache for the given conductors
    ///
    /// Fails only if the sample container cannot be allocated.
    pub fn new(conductors: Vec<Conductor>, config: CacheConfig) -> Result<Self> {
        let samples = DynamicArray::with_capacity(config.initial_capacity)?;
        log::info!(
            "Field cache initialized: {} conductors, {} sample slots, step {}",
            conductors.len(),
            config.initial_capacity,
            config.cell_step
        );
        Ok(Self {
            samples: Mutex::new(samples),
            conductors,
            config,
        })
    }

    /// Cache configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The conductor roster
    pub fn conductors(&self) -> &[Conductor] {
        &self.conductors
    }

    /// Number of resident samples
    pub fn resident_count(&self) -> usize {
        self.lock_samples().len()
    }

    /// Copy of the sample at `index`, if any
    pub fn sample_at(&self, index: usize) -> Option<FieldSample> {
        self.lock_samples().get(index).copied()
    }

    /// Evict stale samples and fill the window around `camera`
    ///
    /// Only allocation failure while appending is reported; the next tick
    /// revisits any cells left unfilled.
    pub fn tick(&self, camera: DVec3) -> Result<TickStats> {
        let window = ViewportWindow::around(camera, &self.config);

        let evicted = self.evict(&window);
        let (reused, computed) = self.fill(&window)?;

        let stats = TickStats {
            evicted,
            reused,
            computed,
            resident: self.resident_count(),
        };
        log::debug!(
            "Field tick at ({:.1}, {:.1}, {:.1}): evicted {}, reused {}, computed {}, resident {}",
            camera.x,
            camera.y,
            camera.z,
            stats.evicted,
            stats.reused,
            stats.computed,
            stats.resident
        );
        Ok(stats)
    }

    /// Copy out every resident sample together with the conductor roster
    ///
    /// Takes the lock once per sample, so an update running concurrently may
    /// shift samples between reads.
    pub fn snapshot_for_render(&self) -> RenderSnapshot<'_> {
        let mut samples = Vec::with_capacity(self.resident_count());
        let mut index = 0;
        while let Some(sample) = self.sample_at(index) {
            samples.push(sample);
            index += 1;
        }
        RenderSnapshot {
            samples,
            conductors: &self.conductors,
        }
    }

    /// Release every resident sample and the container's storage
    ///
    /// Safe to call more than once. A later tick starts from an empty cache.
    pub fn shutdown(&self) {
        let released = {
            let mut samples = self.lock_samples();
            let released = samples.destroy_all();
            *samples = DynamicArray::default();
            released
        };
        log::info!("Field cache shut down, released {} samples", released);
    }

    /// Destroy samples outside the eviction bounds
    fn evict(&self, window: &ViewportWindow) -> usize {
        let mut index = 0;
        let mut evicted = 0;
        loop {
            let mut samples = self.lock_samples();
            let Some(position) = samples.get(index).map(|sample| sample.position) else {
                break;
            };
            if window.is_evictable(position) {
                log::trace!("Evicting sample at {}", position);
                samples.destroy(index);
                evicted += 1;
                // The next sample slid into `index`.
            } else {
                index += 1;
            }
        }
        evicted
    }

    /// Compute samples for window cells not yet cached
    fn fill(&self, window: &ViewportWindow) -> Result<(usize, usize)> {
        let mut reused = 0;
        let mut computed = 0;
        for corner in window.cell_corners() {
            if self.is_cached(&window.cell_box(corner)) {
                reused += 1;
                continue;
            }
            let sample = FieldSample::compute(corner, &self.conductors);
            self.lock_samples().append(sample)?;
            computed += 1;
        }
        Ok((reused, computed))
    }

    /// Linear search for a resident sample inside `cell`
    fn is_cached(&self, cell: &Aabb) -> bool {
        let mut index = 0;
        loop {
            let samples = self.lock_samples();
            match samples.get(index) {
                None => return false,
                Some(sample) if cell.contains_point_half_open(sample.position) => return true,
                Some(_) => index += 1,
            }
        }
    }

    fn lock_samples(&self) -> MutexGuard<'_, DynamicArray<FieldSample>> {
        // A panicked holder cannot leave the container half-shifted mid-call,
        // so the data is still usable.
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
