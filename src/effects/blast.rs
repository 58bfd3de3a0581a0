//! Air blast overpressure and peak wind.
//!
//! Overpressure curves are expressed in scaled distance `r1 = r / E_kT^(1/3)`
//! so a single pair of fits covers every yield. Near a low burst the shock
//! reflects off the ground like a surface explosion; otherwise the pressure
//! decays exponentially with distance from the burst point.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::entry::EntryRegime;
use crate::types::{AMBIENT_PRESSURE, SOUND_SPEED, joules_to_kilotons};

/// Overpressure at the crossover distance of the surface-burst fit (Pa).
const CROSSOVER_PRESSURE: f64 = 75_000.0;

/// Crossover scaled distance of the surface-burst fit (meters).
const CROSSOVER_DISTANCE: f64 = 290.0;

/// Scaled burst height above which no Mach stem forms (meters).
const MACH_CUTOFF_HEIGHT: f64 = 550.0;

/// Which overpressure fit produced a row's blast values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlastModel {
    Surface,
    Airburst,
}

/// Event-wide blast parameters, shared by every row of the effects table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlastSource {
    /// Scaling length `E_kT^(1/3)` (meters per scaled meter).
    scale: f64,
    /// Scaled burst height `h1`; zero for an intact impact.
    scaled_height: f64,
    /// Scaled Mach-reflection transition radius `rm1`.
    mach_radius: f64,
    /// Always use the surface fit.
    surface_only: bool,
    /// Ground energy exceeds air energy.
    ground_dominant: bool,
}

impl BlastSource {
    /// Blast parameters of an event releasing `initial_energy` joules.
    pub fn new(
        regime: &EntryRegime,
        initial_energy: f64,
        ground_energy: f64,
        air_energy: f64,
    ) -> Self {
        let scale = joules_to_kilotons(initial_energy).cbrt();
        let burst_height = match regime {
            EntryRegime::Intact { .. } => 0.0,
            EntryRegime::Airburst { burst_altitude, .. } => *burst_altitude,
            EntryRegime::GroundCloud {
                breakup_altitude, ..
            } => *breakup_altitude,
        };
        let scaled_height = burst_height / scale;

        Self {
            scale,
            scaled_height,
            mach_radius: mach_transition_radius(scaled_height),
            surface_only: regime.is_intact(),
            ground_dominant: ground_energy > air_energy,
        }
    }

    /// Scaled distance `r1` for a ground range in meters.
    pub fn scaled_distance(&self, distance_m: f64) -> f64 {
        distance_m / self.scale
    }

    /// Fit selected at scaled distance `r1`.
    pub fn model_at(&self, r1: f64) -> BlastModel {
        if self.surface_only || (self.ground_dominant && r1 < self.mach_radius) {
            BlastModel::Surface
        } else {
            BlastModel::Airburst
        }
    }

    /// Peak overpressure (Pa) at `distance_m`, with the fit that produced it.
    pub fn overpressure(&self, distance_m: f64) -> (f64, BlastModel) {
        let r1 = self.scaled_distance(distance_m);
        let model = self.model_at(r1);
        let p = match model {
            BlastModel::Surface => surface_overpressure(r1),
            BlastModel::Airburst => airburst_overpressure(r1, self.scaled_height),
        };
        (p, model)
    }
}

/// Surface-burst overpressure (Pa) at scaled distance `r1`; `+∞` at zero.
///
/// p = (p_x·r_x / 4r1) · (1 + 3·(r_x/r1)^1.3)
pub fn surface_overpressure(r1: f64) -> f64 {
    if r1 <= 0.0 {
        return f64::INFINITY;
    }
    let ratio = CROSSOVER_DISTANCE / r1;
    CROSSOVER_PRESSURE * CROSSOVER_DISTANCE / (4.0 * r1) * (1.0 + 3.0 * ratio.powf(1.3))
}

/// Airburst overpressure (Pa) at scaled distance `r1` below a burst at
/// scaled height `h1`.
///
/// p = p0 · exp(−β·r1),  p0 = 3.14e11·h1^−2.6,  β = 34.87·h1^−1.73
pub fn airburst_overpressure(r1: f64, h1: f64) -> f64 {
    let p0 = 3.14e11 * h1.powf(-2.6);
    let beta = 34.87 * h1.powf(-1.73);
    p0 * (-beta * r1).exp()
}

/// Scaled radius at which regular reflection gives way to a Mach stem.
///
/// rm1 = 550·h1 / (1.2·(550 − h1)), unbounded for bursts at or above the
/// cutoff height.
pub fn mach_transition_radius(h1: f64) -> f64 {
    if h1 >= MACH_CUTOFF_HEIGHT {
        return f64::INFINITY;
    }
    MACH_CUTOFF_HEIGHT * h1 / (1.2 * (MACH_CUTOFF_HEIGHT - h1))
}

/// Peak wind velocity (m/s) behind a shock of overpressure `p` (Pa).
///
/// u = (5p / 7P0) · c0 / √(1 + 6p / 7P0)
pub fn peak_wind_velocity(p: f64) -> f64 {
    if p.is_infinite() {
        return f64::INFINITY;
    }
    let x = p / (7.0 * AMBIENT_PRESSURE);
    5.0 * x * SOUND_SPEED / (1.0 + 6.0 * x).sqrt()
}
