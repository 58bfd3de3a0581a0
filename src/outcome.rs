//! Whole-event impact outcome.
//!
//! Runs the four model stages in order:
//! - entry: kinetic energy and atmospheric deceleration
//! - breakup: intact, airburst or ground-cloud classification
//! - crater: cavity, fireball and seismic source for ground impacts
//! - effects: the per-kilometre table of local consequences

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::ImpactConfig;
use crate::crater::{Crater, seismic_magnitude};
use crate::effects::{BlastSource, EffectsSource, EffectsTable};
use crate::entry::{EntryRegime, classify_entry, energy_at_velocity, kinetic_energy};
use crate::input::{ImpactError, ImpactorSpec};
use crate::types::{joules_to_kilotons, joules_to_megatons};

/// Result of one impact computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ImpactOutcome {
    pub impactor: ImpactorSpec,
    /// Kinetic energy at the top of the atmosphere, E0 (joules).
    pub initial_energy: f64,
    /// Energy delivered to the ground (joules).
    pub ground_energy: f64,
    /// Energy dissipated in the atmosphere (joules).
    pub air_energy: f64,
    pub regime: EntryRegime,
    /// Crater, if one forms.
    pub crater: Option<Crater>,
    /// Richter magnitude at the source. `None` without ground energy.
    pub seismic_magnitude: Option<f64>,
    pub effects: EffectsTable,
}

impl ImpactOutcome {
    /// Velocity at the surface (m/s). `None` for an airburst.
    pub fn ground_velocity(&self) -> Option<f64> {
        self.regime.ground_velocity()
    }

    /// Altitude at which breakup begins, z* (meters).
    pub fn breakup_altitude(&self) -> f64 {
        self.regime.breakup_altitude()
    }

    /// Altitude of complete dispersal, zb (meters).
    pub fn burst_altitude(&self) -> f64 {
        self.regime.burst_altitude()
    }

    /// Final crater diameter (meters), if a crater forms.
    pub fn crater_diameter(&self) -> Option<f64> {
        self.crater.map(|c| c.final_diameter)
    }

    /// Final crater depth (meters), if a crater forms.
    pub fn crater_depth(&self) -> Option<f64> {
        self.crater.map(|c| c.depth)
    }

    /// Initial energy in megatons of TNT.
    pub fn megatons(&self) -> f64 {
        joules_to_megatons(self.initial_energy)
    }

    /// Initial energy in kilotons of TNT.
    pub fn kilotons(&self) -> f64 {
        joules_to_kilotons(self.initial_energy)
    }
}

/// Compute the consequences of `spec` with the default model configuration.
pub fn compute_impact(spec: &ImpactorSpec) -> Result<ImpactOutcome, ImpactError> {
    compute_impact_with(spec, &ImpactConfig::default())
}

/// Compute the consequences of `spec` under `config`.
///
/// Fails only when the inputs or the configuration lie outside their
/// physical domain; no work is done in that case.
pub fn compute_impact_with(
    spec: &ImpactorSpec,
    config: &ImpactConfig,
) -> Result<ImpactOutcome, ImpactError> {
    spec.validate()?;
    config.validate()?;

    let initial_energy = kinetic_energy(spec.diameter, spec.density, spec.velocity);
    // Overflow to +∞ or underflow to 0 leaves every downstream ratio undefined
    if !initial_energy.is_finite() || initial_energy <= 0.0 {
        return Err(ImpactError::EnergyOutOfRange(initial_energy));
    }
    let regime = classify_entry(spec, config);

    let (ground_energy, air_energy) = match regime.ground_velocity() {
        Some(v) => {
            let ground = energy_at_velocity(v, spec.velocity, initial_energy);
            (ground, initial_energy - ground)
        }
        // Fully dispersed: everything is deposited in the air
        None => (0.0, initial_energy),
    };

    tracing::debug!(
        regime = regime.name(),
        initial_energy,
        ground_energy,
        air_energy,
        "classified atmospheric entry"
    );

    let crater = match regime {
        EntryRegime::Intact { ground_velocity } if ground_energy > 0.0 => Some(Crater::from_impact(
            spec.diameter,
            spec.density,
            spec.target_density,
            ground_velocity,
            spec.angle,
            ground_energy,
            config.target,
        )),
        EntryRegime::GroundCloud {
            ground_velocity,
            pancake_diameter,
            ..
        } if ground_energy > 0.0 => Some(Crater::from_impact(
            pancake_diameter,
            spec.density,
            spec.target_density,
            ground_velocity,
            spec.angle,
            ground_energy,
            config.target,
        )),
        _ => None,
    };
    if let Some(c) = &crater {
        tracing::trace!(
            transient_diameter = c.transient_diameter,
            final_diameter = c.final_diameter,
            morphology = ?c.morphology,
            "crater formed"
        );
    }

    let source_magnitude = seismic_magnitude(ground_energy);
    let source = EffectsSource {
        energy: initial_energy,
        source_magnitude,
        crater,
        blast: BlastSource::new(&regime, initial_energy, ground_energy, air_energy),
        luminous_efficiency: config.luminous_efficiency,
        ejecta_size_exponent: config.ejecta_size_exponent,
    };
    let effects = EffectsTable::build(&source, config.parallel);

    Ok(ImpactOutcome {
        impactor: *spec,
        initial_energy,
        ground_energy,
        air_energy,
        regime,
        crater,
        seismic_magnitude: source_magnitude,
        effects,
    })
}
