//! Background update worker.
//!
//! The render side raises an update request once per frame; the worker thread
//! picks it up, copies the latest camera position and runs one cache tick.
//! When nothing was requested since its last pass it sleeps briefly instead.
//! A failed tick stops the worker; the error is returned from
//! [`UpdateWorker::stop`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{DVec3, Result};
use crate::field::{FieldCache, TickStats};

/// Something the worker can refresh around a camera position
pub trait FieldUpdate: Send + Sync {
    fn update(&self, camera: DVec3) -> Result<TickStats>;
}

impl FieldUpdate for FieldCache {
    fn update(&self, camera: DVec3) -> Result<TickStats> {
        self.tick(camera)
    }
}

/// Configuration for the update worker
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Sleep between polls while no update is requested
    pub idle_sleep_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { idle_sleep_ms: 100 }
    }
}

/// State shared between the requesting side and the worker thread
struct UpdateState {
    running: bool,
    update_requested: bool,
    camera: DVec3,
    last_tick: Option<Instant>,
    update_delta: Duration,
    failure: Option<Error>,
}

/// Dedicated thread running cache ticks on request
pub struct UpdateWorker {
    state: Arc<Mutex<UpdateState>>,
    ticks: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl UpdateWorker {
    /// Start the worker thread for `cache`
    pub fn spawn<F: FieldUpdate + 'static>(cache: Arc<F>, config: WorkerConfig) -> Result<Self> {
        let state = Arc::new(Mutex::new(UpdateState {
            running: true,
            update_requested: false,
            camera: DVec3::ZERO,
            last_tick: None,
            update_delta: Duration::ZERO,
            failure: None,
        }));
        let ticks = Arc::new(AtomicU64::new(0));

        let thread_state = state.clone();
        let thread_ticks = ticks.clone();
        let idle_sleep = Duration::from_millis(config.idle_sleep_ms);
        let handle = std::thread::Builder::new()
            .name("field-update".into())
            .spawn(move || run(cache, thread_state, thread_ticks, idle_sleep))
            .map_err(|e| Error::Worker(format!("failed to spawn update thread: {e}")))?;

        log::info!("Update worker started (idle sleep {}ms)", config.idle_sleep_ms);
        Ok(Self {
            state,
            ticks,
            handle: Some(handle),
        })
    }

    /// Ask for a tick at `camera`; later requests overwrite earlier ones
    pub fn request_update(&self, camera: DVec3) {
        let mut state = lock(&self.state);
        state.camera = camera;
        state.update_requested = true;
    }

    /// Number of ticks the worker has finished
    pub fn ticks_completed(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Time between the two most recent ticks
    pub fn last_update_delta(&self) -> Duration {
        lock(&self.state).update_delta
    }

    /// Check if the worker thread is still accepting requests
    ///
    /// Turns false after `stop` or after a failed tick.
    pub fn is_running(&self) -> bool {
        lock(&self.state).running
    }

    /// Stop the worker and wait for its current tick to finish
    ///
    /// Returns the error of a failed tick, once.
    pub fn stop(&mut self) -> Result<()> {
        lock(&self.state).running = false;
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| Error::Worker("update thread panicked".into()))?;
            log::info!("Update worker stopped after {} ticks", self.ticks_completed());
        }
        match lock(&self.state).failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Drop for UpdateWorker {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log::error!("{err}");
        }
    }
}

fn run<F: FieldUpdate>(cache: Arc<F>, state: Arc<Mutex<UpdateState>>, ticks: Arc<AtomicU64>, idle_sleep: Duration) {
    loop {
        let camera = {
            let mut state = lock(&state);
            if !state.running {
                break;
            }
            if !state.update_requested {
                None
            } else {
                state.update_requested = false;
                let now = Instant::now();
                if let Some(last) = state.last_tick.replace(now) {
                    state.update_delta = now - last;
                }
                Some(state.camera)
            }
        };

        let Some(camera) = camera else {
            std::thread::sleep(idle_sleep);
            continue;
        };

        if let Err(err) = cache.update(camera) {
            log::error!("Field update failed, stopping worker: {err}");
            let mut state = lock(&state);
            state.running = false;
            state.failure = Some(err);
            break;
        }
        ticks.fetch_add(1, Ordering::AcqRel);
    }
}

fn lock(state: &Mutex<UpdateState>) -> MutexGuard<'_, UpdateState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
