//! Container types

pub mod dynamic_array;

pub use dynamic_array::{DynamicArray, Iter, GROWTH_FACTOR, SHRINK_FACTOR};
