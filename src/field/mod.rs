//! Magnetic field sampling around a moving camera

pub mod config;
pub mod conductor;
pub mod sample;
pub mod window;
pub mod cache;

pub use config::CacheConfig;
pub use conductor::{Conductor, default_conductors, DEFAULT_PERMEABILITY};
pub use sample::{FieldSample, DRAW_THRESHOLD_SQ};
pub use window::ViewportWindow;
pub use cache::{FieldCache, RenderSnapshot, TickStats};
