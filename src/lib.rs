//! Magfield - camera-relative magnetic field sampling
//!
//! A [`field::FieldCache`] keeps field samples for the grid cells around a
//! moving camera, stored in a [`collections::DynamicArray`]. An update worker
//! refreshes it on request while render code reads snapshots.

pub mod core;
pub mod math;
pub mod collections;
pub mod physics;
pub mod field;
pub mod scene;
pub mod schedule;
