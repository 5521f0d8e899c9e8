//! Magfield - headless field viewer
//!
//! Flies a camera through the stock (or a JSON) scene, keeping the field cache
//! refreshed from a background worker while the frame loop takes snapshots.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use magfield::core::{camera::Camera, logging, time::FrameTimer, Result};
use magfield::field::FieldCache;
use magfield::scene::SceneConfig;
use magfield::schedule::UpdateWorker;

/// Frames rendered when `--frames` is not given
const DEFAULT_FRAMES: u64 = 600;
/// Camera step per frame, in units of the view direction
const DEFAULT_SPEED: f64 = 0.16;
/// Camera yaw per frame
const TURN_PER_FRAME: f64 = 0.004;

fn main() -> ExitCode {
    logging::init();
    log::info!("Magfield starting...");

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Can't run field viewer: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let scene = match parse_scene_arg(args) {
        Some(path) => SceneConfig::load(&path)?,
        None => SceneConfig::default(),
    };
    let frames = parse_frames_arg(args).unwrap_or(DEFAULT_FRAMES);
    let speed = parse_speed_arg(args).unwrap_or(DEFAULT_SPEED);

    let cache = Arc::new(FieldCache::new(scene.conductors.clone(), scene.cache)?);
    let mut worker = UpdateWorker::spawn(cache.clone(), scene.worker)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(render_loop(&cache, &worker, &scene, frames, speed));

    let stopped = worker.stop();
    cache.shutdown();
    stopped
}

/// Render schedule: one snapshot per frame on a fixed-period timer
async fn render_loop(cache: &FieldCache, worker: &UpdateWorker, scene: &SceneConfig, frames: u64, speed: f64) {
    let mut interval = tokio::time::interval(Duration::from_millis(scene.frame_interval_ms.max(1)));
    let mut camera: Camera = scene.camera;
    let mut timer = FrameTimer::new();

    for _ in 0..frames {
        interval.tick().await;
        if !worker.is_running() {
            log::warn!("Update worker is gone, ending render loop");
            break;
        }

        camera.move_forward(speed);
        camera.turn(TURN_PER_FRAME);
        worker.request_update(camera.position);

        let snapshot = cache.snapshot_for_render();
        if timer.tick() {
            let p = camera.position;
            log::info!(
                "FPS: {:.0}, rendDt: {}ms, updDt: {}ms, camPos: ({:.1}, {:.1}, {:.1}), samples: {} drawn / {} resident, conductors: {}",
                timer.fps(),
                timer.delta().as_millis(),
                worker.last_update_delta().as_millis(),
                p.x,
                p.y,
                p.z,
                snapshot.drawable().count(),
                snapshot.samples.len(),
                snapshot.conductors.len()
            );
        }
    }
    log::info!(
        "Rendered {} frames, {} field updates",
        timer.frame_count(),
        worker.ticks_completed()
    );
}

/// Parse --scene argument from command line
fn parse_scene_arg(args: &[String]) -> Option<PathBuf> {
    arg_value(args, "--scene", "-s").map(PathBuf::from)
}

/// Parse --frames argument from command line
fn parse_frames_arg(args: &[String]) -> Option<u64> {
    arg_value(args, "--frames", "-f")?.parse().ok()
}

/// Parse --speed argument from command line
fn parse_speed_arg(args: &[String]) -> Option<f64> {
    arg_value(args, "--speed", "-v")?.parse().ok()
}

fn arg_value<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == long || arg == short)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
