//! Atmospheric entry of an impactor.
//!
//! This module provides the energy and drag models for a body crossing an
//! exponential atmosphere, and the breakup classifier that decides whether
//! the body reaches the ground intact, as a dispersed fragment cloud, or not
//! at all.

mod breakup;

#[cfg(test)]
mod proptest_entry;

use std::f64::consts::PI;

use crate::config::Atmosphere;
use crate::types::DEG_TO_RAD;

pub use breakup::{
    EntryRegime, breakup_altitude, breakup_parameter, breakup_strength, burst_altitude,
    classify_entry, dispersion_length, pancake_diameter, swarm_velocity,
};

/// Kinetic energy of a spherical impactor (joules).
///
/// E = (π/12) · ρi · L0³ · v0²
pub fn kinetic_energy(diameter: f64, density: f64, velocity: f64) -> f64 {
    (PI / 12.0) * density * diameter.powi(3) * velocity.powi(2)
}

/// Velocity of an intact impactor at altitude `z` (meters).
///
/// v = v0 · exp(-k · exp(-z/H)),  k = 3·C_D·H·ρ0 / (4·ρi·L0·sin θ)
///
/// A grazing angle (`sin θ == 0`) has no defined drag path, so the entry
/// velocity is returned unchanged.
pub fn velocity_at_altitude(
    velocity: f64,
    diameter: f64,
    density: f64,
    angle_deg: f64,
    z: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let sin_t = (angle_deg * DEG_TO_RAD).sin();
    if sin_t == 0.0 {
        tracing::warn!(angle_deg, "grazing entry, skipping atmospheric deceleration");
        return velocity;
    }

    let h = atmosphere.scale_height;
    let k = 3.0 * atmosphere.drag_coefficient * h * atmosphere.surface_density
        / (4.0 * density * diameter * sin_t);
    let drag = k * (-z / h).exp();

    // inf * 0: near-grazing path far above the atmosphere
    if drag.is_nan() {
        return velocity;
    }
    velocity * (-drag).exp()
}

/// Energy remaining after slowing from `initial_velocity` to `velocity`.
///
/// E = E0 · (v/v0)²
pub fn energy_at_velocity(velocity: f64, initial_velocity: f64, initial_energy: f64) -> f64 {
    initial_energy * (velocity / initial_velocity).powi(2)
}
