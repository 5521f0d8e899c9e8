//! Scene description for the field viewer

pub mod config;

pub use config::SceneConfig;
