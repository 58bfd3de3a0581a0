//! Ground interaction: crater scaling, fireball and seismic source.
//!
//! Crater sizes follow pi-group scaling for the transient cavity, then a
//! simple/complex collapse rule for the final crater.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::TargetMaterial;
use crate::types::{DEG_TO_RAD, METERS_PER_KM, SURFACE_GRAVITY};

/// Transient diameter at which craters switch from simple to complex (meters).
pub const SIMPLE_COMPLEX_TRANSITION: f64 = 2560.0;

/// Final diameter scale of the complex crater collapse relation (meters).
const COMPLEX_SCALE_DIAMETER: f64 = 3200.0;

/// Final crater morphology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CraterMorphology {
    /// Bowl-shaped crater (transient diameter below the transition).
    Simple,
    /// Collapsed crater with central peak or ring.
    Complex,
}

impl CraterMorphology {
    /// Morphology of a crater with the given transient diameter.
    ///
    /// A transient diameter of exactly 2560 m is complex.
    pub fn from_transient_diameter(transient_diameter: f64) -> Self {
        if transient_diameter < SIMPLE_COMPLEX_TRANSITION {
            CraterMorphology::Simple
        } else {
            CraterMorphology::Complex
        }
    }
}

/// Crater and near-field products of a ground impact.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Crater {
    /// Transient cavity diameter (meters)
    pub transient_diameter: f64,
    /// Transient cavity depth (meters)
    pub transient_depth: f64,
    /// Final rim-to-rim diameter (meters)
    pub final_diameter: f64,
    /// Final crater depth (meters)
    pub depth: f64,
    pub morphology: CraterMorphology,
    /// Fireball radius (meters)
    pub fireball_radius: f64,
    /// Volume of impact melt (m³)
    pub melt_volume: f64,
}

impl Crater {
    /// Build the crater of an impact delivering `ground_energy` joules.
    ///
    /// `diameter` is the impactor diameter at the surface: the original body
    /// for an intact impact, the pancaked cloud for a fragment swarm.
    pub fn from_impact(
        diameter: f64,
        density: f64,
        target_density: f64,
        ground_velocity: f64,
        angle_deg: f64,
        ground_energy: f64,
        target: TargetMaterial,
    ) -> Self {
        let transient_diameter = transient_crater_diameter(
            diameter,
            density,
            target_density,
            ground_velocity,
            angle_deg,
            target,
        );
        let morphology = CraterMorphology::from_transient_diameter(transient_diameter);
        let final_diameter = final_crater_diameter(transient_diameter);

        Self {
            transient_diameter,
            transient_depth: transient_diameter / (2.0 * std::f64::consts::SQRT_2),
            final_diameter,
            depth: crater_depth(final_diameter, morphology),
            morphology,
            fireball_radius: fireball_radius(ground_energy),
            melt_volume: melt_volume(ground_energy, angle_deg),
        }
    }
}

/// Transient crater diameter (meters).
///
/// D_tc = C · (ρi/ρt)^(1/3) · L^0.78 · v^0.44 · g^-0.22 · sin(θ)^(1/3)
pub fn transient_crater_diameter(
    diameter: f64,
    density: f64,
    target_density: f64,
    velocity: f64,
    angle_deg: f64,
    target: TargetMaterial,
) -> f64 {
    target.crater_constant()
        * (density / target_density).cbrt()
        * diameter.powf(0.78)
        * velocity.powf(0.44)
        * SURFACE_GRAVITY.powf(-0.22)
        * (angle_deg * DEG_TO_RAD).sin().cbrt()
}

/// Final crater diameter after collapse (meters).
pub fn final_crater_diameter(transient_diameter: f64) -> f64 {
    match CraterMorphology::from_transient_diameter(transient_diameter) {
        CraterMorphology::Simple => 1.2 * transient_diameter,
        CraterMorphology::Complex => {
            1.17 * transient_diameter.powf(1.13) * COMPLEX_SCALE_DIAMETER.powf(-0.13)
        }
    }
}

/// Final crater depth (meters).
///
/// Simple craters are 0.2 of their diameter deep. Complex depth follows
/// `d = 0.294 · D^0.301` with both lengths in kilometers.
pub fn crater_depth(final_diameter: f64, morphology: CraterMorphology) -> f64 {
    match morphology {
        CraterMorphology::Simple => 0.20 * final_diameter,
        CraterMorphology::Complex => {
            0.294 * (final_diameter / METERS_PER_KM).powf(0.301) * METERS_PER_KM
        }
    }
}

/// Fireball radius (meters) for an energy in joules.
pub fn fireball_radius(energy: f64) -> f64 {
    0.002 * energy.cbrt()
}

/// Impact melt volume (m³).
///
/// V_m = 8.9e-12 · E · sin θ
pub fn melt_volume(energy: f64, angle_deg: f64) -> f64 {
    8.9e-12 * energy * (angle_deg * DEG_TO_RAD).sin()
}

/// Richter-scale magnitude of the seismic shaking at the source.
///
/// M = 0.67 · log10(E) − 5.87. `None` when no energy reaches the ground.
pub fn seismic_magnitude(ground_energy: f64) -> Option<f64> {
    (ground_energy > 0.0).then(|| 0.67 * ground_energy.log10() - 5.87)
}
