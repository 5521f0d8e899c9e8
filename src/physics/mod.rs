//! Closed-form electromagnetic field and force evaluation

pub mod electromagnetism;

pub use electromagnetism::{
    coulomb_force, electric_field_point, lorentz_force, magnetic_field_point,
    COULOMB_CONSTANT, VACUUM_PERMITTIVITY,
};
