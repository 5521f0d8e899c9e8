//! Update schedule driving the field cache

pub mod worker;

pub use worker::{FieldUpdate, UpdateWorker, WorkerConfig};
