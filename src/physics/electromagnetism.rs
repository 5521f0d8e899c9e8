//! Point evaluations of electric and magnetic fields.
//!
//! All functions are pure and unchecked: a zero-length separation vector
//! produces non-finite components rather than an error.

use std::f64::consts::PI;

use crate::core::types::DVec3;

/// Vacuum permittivity ε₀ in F/m
pub const VACUUM_PERMITTIVITY: f64 = 8.854187817e-12;

/// Coulomb constant k = 1 / (4π ε₀)
pub const COULOMB_CONSTANT: f64 = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);

/// Force on a charge `q` moving with velocity `v` through fields `e` and `b`
pub fn lorentz_force(q: f64, e: DVec3, v: DVec3, b: DVec3) -> DVec3 {
    (e + v.cross(b)) * q
}

/// Force on a stationary charge `q` in field `e`
pub fn coulomb_force(q: f64, e: DVec3) -> DVec3 {
    e * q
}

/// Electric field of point charge `q` at offset `r` from the charge
pub fn electric_field_point(q: f64, r: DVec3) -> DVec3 {
    let r_len_sq = r.length_squared();
    let r_len = r_len_sq.sqrt();
    r * (COULOMB_CONSTANT * q / r_len_sq / r_len)
}

/// Magnetic field of a current segment `l` carrying `current`, evaluated at
/// offset `r` from the segment start
///
/// B = μ/4π · I · (l × r₁) / |r₁|³ with r₁ = r − l.
pub fn magnetic_field_point(current: f64, permeability: f64, l: DVec3, r: DVec3) -> DVec3 {
    let constant = permeability / (4.0 * PI);
    let r1 = r - l;
    let r1_len_sq = r1.length_squared();
    let r1_len = r1_len_sq.sqrt();
    l.cross(r1) * (constant * current / r1_len_sq / r1_len)
}
