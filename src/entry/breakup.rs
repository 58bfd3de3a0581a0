//! Atmospheric breakup classification.
//!
//! An impactor fails when the ram pressure `ρ(z)·v²` exceeds its strength.
//! After failure the fragments spread laterally (the "pancake" model) and
//! either disperse completely in the air or hit the ground as a wide cloud.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::{Atmosphere, ImpactConfig};
use crate::input::ImpactorSpec;

use super::velocity_at_altitude;

/// How the impactor crossed the atmosphere.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "regime", rename_all = "snake_case"))]
pub enum EntryRegime {
    /// No breakup before ground impact.
    Intact {
        /// Velocity at the surface (m/s).
        ground_velocity: f64,
    },

    /// Breakup followed by complete dispersal above the ground.
    Airburst {
        /// Altitude at which breakup begins, z* (meters).
        breakup_altitude: f64,
        /// Altitude at which the cloud is fully dispersed, zb (meters).
        burst_altitude: f64,
        /// Swarm velocity at the burst altitude (m/s).
        burst_velocity: f64,
    },

    /// Breakup, but the fragment cloud still reaches the ground.
    GroundCloud {
        /// Altitude at which breakup begins, z* (meters).
        breakup_altitude: f64,
        /// Swarm velocity at the surface (m/s).
        ground_velocity: f64,
        /// Pancaked cloud diameter at the surface (meters).
        pancake_diameter: f64,
    },
}

impl EntryRegime {
    /// Velocity at the surface. `None` for an airburst.
    pub fn ground_velocity(&self) -> Option<f64> {
        match self {
            EntryRegime::Intact { ground_velocity }
            | EntryRegime::GroundCloud {
                ground_velocity, ..
            } => Some(*ground_velocity),
            EntryRegime::Airburst { .. } => None,
        }
    }

    /// Breakup altitude z* (meters). Zero when the body stays intact.
    pub fn breakup_altitude(&self) -> f64 {
        match self {
            EntryRegime::Intact { .. } => 0.0,
            EntryRegime::Airburst {
                breakup_altitude, ..
            }
            | EntryRegime::GroundCloud {
                breakup_altitude, ..
            } => *breakup_altitude,
        }
    }

    /// Complete-dispersal altitude zb (meters). Zero unless an airburst.
    pub fn burst_altitude(&self) -> f64 {
        match self {
            EntryRegime::Airburst { burst_altitude, .. } => *burst_altitude,
            _ => 0.0,
        }
    }

    pub fn is_intact(&self) -> bool {
        matches!(self, EntryRegime::Intact { .. })
    }

    pub fn is_airburst(&self) -> bool {
        matches!(self, EntryRegime::Airburst { .. })
    }

    pub fn is_ground_cloud(&self) -> bool {
        matches!(self, EntryRegime::GroundCloud { .. })
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            EntryRegime::Intact { .. } => "intact",
            EntryRegime::Airburst { .. } => "airburst",
            EntryRegime::GroundCloud { .. } => "ground cloud",
        }
    }
}

/// Yield strength of the impactor (Pa).
///
/// log10 Yi = 2.107 + 0.0624·√ρi
pub fn breakup_strength(density: f64) -> f64 {
    10f64.powf(2.107 + 0.0624 * density.sqrt())
}

/// Dimensionless breakup parameter `If`.
///
/// If = 4.07·C_D·H·Yi / (ρi·L0·v0²·sin θ)
///
/// Values in (0, 1) mean the body fails before reaching the ground. A grazing
/// angle yields `+∞`.
pub fn breakup_parameter(spec: &ImpactorSpec, strength: f64, atmosphere: &Atmosphere) -> f64 {
    4.07 * atmosphere.drag_coefficient * atmosphere.scale_height * strength
        / (spec.density * spec.diameter * spec.velocity.powi(2) * spec.angle_radians().sin())
}

/// Altitude z* at which breakup begins (meters).
///
/// Only meaningful for `0 < If < 1`; callers route every other value to the
/// intact branch before calling.
pub fn breakup_altitude(
    spec: &ImpactorSpec,
    strength: f64,
    parameter: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let ram = atmosphere.surface_density * spec.velocity.powi(2);
    -atmosphere.scale_height
        * ((strength / ram).ln() + 1.308 + 0.314 * parameter - 1.303 * (1.0 - parameter).sqrt())
}

/// Transverse length scale `l` of the fragment cloud (meters).
///
/// l = L0 · sin θ · √(ρi / (C_D · ρ(z*)))
pub fn dispersion_length(
    spec: &ImpactorSpec,
    breakup_altitude: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let rho = atmosphere.density_at(breakup_altitude);
    spec.diameter
        * spec.angle_radians().sin()
        * (spec.density / (atmosphere.drag_coefficient * rho)).sqrt()
}

/// Altitude zb at which the pancake reaches `pancake_ratio` times its initial
/// diameter (meters), clamped to zero.
///
/// zb = z* − 2H · ln(1 + (l/2H) · √(fp² − 1))
///
/// Zero means the cloud reaches the ground before dispersing.
pub fn burst_altitude(
    breakup_altitude: f64,
    dispersion_length: f64,
    pancake_ratio: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let two_h = 2.0 * atmosphere.scale_height;
    let spread = (dispersion_length / two_h) * (pancake_ratio.powi(2) - 1.0).sqrt();
    let z = breakup_altitude - two_h * spread.ln_1p();
    if z > 0.0 { z } else { 0.0 }
}

/// Diameter of the pancaked fragment cloud at altitude `z <= z*` (meters).
///
/// L(z) = L0 · √(1 + (2H/l)² · (exp((z* − z)/2H) − 1)²)
pub fn pancake_diameter(
    diameter: f64,
    breakup_altitude: f64,
    dispersion_length: f64,
    z: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let h = atmosphere.scale_height;
    let a = 2.0 * h / dispersion_length;
    let growth = ((breakup_altitude - z) / (2.0 * h)).exp_m1();
    diameter * (1.0 + (a * growth).powi(2)).sqrt()
}

/// Velocity of the fragment cloud at altitude `z <= z*` (m/s).
///
/// Closed form of the dispersed-cloud drag integral
///
/// v(z) = v(z*) · exp(−(3/4) · C_D·ρ(z*)·H / (ρi·L0·sin θ) · S(U)),  U = (z* − z)/H
///
/// where `S(U) = ∫₀ᵁ eᵘ · (L(u)/L0)² du`.
pub fn swarm_velocity(
    spec: &ImpactorSpec,
    breakup_altitude: f64,
    dispersion_length: f64,
    z: f64,
    atmosphere: &Atmosphere,
) -> f64 {
    let h = atmosphere.scale_height;
    let v_star = velocity_at_altitude(
        spec.velocity,
        spec.diameter,
        spec.density,
        spec.angle,
        breakup_altitude,
        atmosphere,
    );

    let u = (breakup_altitude - z) / h;
    let a_sq = (2.0 * h / dispersion_length).powi(2);
    // ∫ eᵘ(e^{u/2} − 1)² du, never negative
    let spread =
        ((2.0 * u).exp_m1() / 2.0 - 4.0 / 3.0 * (1.5 * u).exp_m1() + u.exp_m1()).max(0.0);
    let integral = u.exp_m1() + a_sq * spread;

    let coefficient =
        0.75 * atmosphere.drag_coefficient * atmosphere.density_at(breakup_altitude) * h
            / (spec.density * spec.diameter * spec.angle_radians().sin());
    let exponent = coefficient * integral;

    if exponent.is_nan() {
        return v_star;
    }
    v_star * (-exponent).exp()
}

/// Classify the entry of `spec` into one of the three regimes.
///
/// Ties resolve to the non-breakup side: `If >= 1` and `z* <= 0` are intact,
/// `zb == 0` is a ground cloud.
pub fn classify_entry(spec: &ImpactorSpec, config: &ImpactConfig) -> EntryRegime {
    let atmosphere = &config.atmosphere;
    let intact = || EntryRegime::Intact {
        ground_velocity: velocity_at_altitude(
            spec.velocity,
            spec.diameter,
            spec.density,
            spec.angle,
            0.0,
            atmosphere,
        ),
    };

    let strength = breakup_strength(spec.density);
    let parameter = breakup_parameter(spec, strength, atmosphere);
    tracing::trace!(strength, parameter, "breakup parameter");

    // Also catches NaN and the +∞ of a grazing angle
    if !(parameter > 0.0 && parameter < 1.0) {
        return intact();
    }

    let z_star = breakup_altitude(spec, strength, parameter, atmosphere);
    if z_star.is_nan() || z_star <= 0.0 {
        return intact();
    }

    let l = dispersion_length(spec, z_star, atmosphere);
    let zb = burst_altitude(z_star, l, config.pancake_ratio, atmosphere);
    tracing::trace!(z_star, dispersion_length = l, zb, "breakup altitudes");

    if zb > 0.0 {
        EntryRegime::Airburst {
            breakup_altitude: z_star,
            burst_altitude: zb,
            burst_velocity: swarm_velocity(spec, z_star, l, zb, atmosphere),
        }
    } else {
        EntryRegime::GroundCloud {
            breakup_altitude: z_star,
            ground_velocity: swarm_velocity(spec, z_star, l, 0.0, atmosphere),
            pancake_diameter: pancake_diameter(spec.diameter, z_star, l, 0.0, atmosphere),
        }
    }
}
