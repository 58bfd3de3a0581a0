//! Distance-indexed impact effects.
//!
//! Every integer kilometre from ground zero out to [`EFFECTS_TABLE_LEN`] gets
//! one [`EffectsRow`]. Rows depend only on event-wide quantities captured in
//! an [`EffectsSource`], never on each other, so the sweep runs on the rayon
//! pool without changing any value.

pub mod blast;
pub mod ejecta;
pub mod seismic;

use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::crater::Crater;
use crate::types::{EFFECTS_TABLE_LEN, METERS_PER_KM};

pub use blast::{BlastModel, BlastSource};
pub use seismic::MercalliBand;

/// Local effects at one distance from ground zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EffectsRow {
    /// Distance from ground zero (km)
    pub distance_km: u32,
    /// Thermal exposure (J/m²), `+∞` at ground zero
    pub thermal_exposure: f64,
    /// Richter magnitude at the source. `None` without ground energy.
    pub source_magnitude: Option<f64>,
    /// Distance-attenuated magnitude
    pub effective_magnitude: Option<f64>,
    pub intensity: Option<MercalliBand>,
    /// Ejecta deposit thickness (meters). `None` without a crater.
    pub ejecta_thickness: Option<f64>,
    /// Mean ejecta fragment size (meters). `None` without a crater.
    pub ejecta_mean_size: Option<f64>,
    /// Peak blast overpressure (Pa)
    pub overpressure: f64,
    /// Peak wind velocity (m/s)
    pub peak_wind: f64,
    pub blast_model: BlastModel,
}

/// Event-wide inputs of the effects sweep.
#[derive(Clone, Copy, Debug)]
pub struct EffectsSource {
    /// Total energy released (joules)
    pub energy: f64,
    pub source_magnitude: Option<f64>,
    pub crater: Option<Crater>,
    pub blast: BlastSource,
    pub luminous_efficiency: f64,
    pub ejecta_size_exponent: f64,
}

impl EffectsSource {
    /// Compute the row at `distance_km`.
    pub fn row(&self, distance_km: u32) -> EffectsRow {
        let km = f64::from(distance_km);
        let meters = km * METERS_PER_KM;

        let effective_magnitude = self
            .source_magnitude
            .map(|m| seismic::effective_magnitude(m, km));
        let (overpressure, blast_model) = self.blast.overpressure(meters);

        EffectsRow {
            distance_km,
            thermal_exposure: thermal_exposure(self.energy, meters, self.luminous_efficiency),
            source_magnitude: self.source_magnitude,
            effective_magnitude,
            intensity: effective_magnitude.map(MercalliBand::from_magnitude),
            ejecta_thickness: self
                .crater
                .map(|c| ejecta::ejecta_thickness(c.transient_diameter, meters)),
            ejecta_mean_size: self.crater.map(|c| {
                ejecta::mean_fragment_size(c.final_diameter, meters, self.ejecta_size_exponent)
            }),
            overpressure,
            peak_wind: blast::peak_wind_velocity(overpressure),
            blast_model,
        }
    }
}

/// Radiant energy per unit area (J/m²) at `distance_m`.
///
/// θ = K·E / (2π·r²); `+∞` at ground zero.
pub fn thermal_exposure(energy: f64, distance_m: f64, luminous_efficiency: f64) -> f64 {
    if distance_m <= 0.0 {
        return f64::INFINITY;
    }
    luminous_efficiency * energy / (std::f64::consts::TAU * distance_m.powi(2))
}

/// Dense table of effects, one row per integer kilometre.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectsTable {
    rows: Vec<EffectsRow>,
}

impl EffectsTable {
    /// Sweep every distance in `[0, EFFECTS_TABLE_LEN)` km.
    pub fn build(source: &EffectsSource, parallel: bool) -> Self {
        let len = EFFECTS_TABLE_LEN as u32;
        let rows = if parallel {
            (0..len).into_par_iter().map(|km| source.row(km)).collect()
        } else {
            (0..len).map(|km| source.row(km)).collect()
        };
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `distance_km`, if inside the table.
    pub fn get(&self, distance_km: usize) -> Option<&EffectsRow> {
        self.rows.get(distance_km)
    }

    pub fn rows(&self) -> &[EffectsRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EffectsRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a EffectsTable {
    type Item = &'a EffectsRow;
    type IntoIter = std::slice::Iter<'a, EffectsRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
