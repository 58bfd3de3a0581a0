//! Property-based tests for the entry and breakup models using proptest.
//!
//! These tests verify the outcome invariants across a wide range of impactors.

use proptest::prelude::*;

use crate::config::{Atmosphere, ImpactConfig};
use crate::effects::MercalliBand;
use crate::input::ImpactorSpec;
use crate::outcome::compute_impact_with;
use crate::test_utils::assertions;

use super::{breakup_parameter, breakup_strength, classify_entry, velocity_at_altitude};

fn impactor() -> impl Strategy<Value = ImpactorSpec> {
    (
        1.0f64..2000.0,
        1000.0f64..8000.0,
        11_000.0f64..72_000.0,
        1.0f64..=90.0,
        1000.0f64..3000.0,
    )
        .prop_map(|(diameter, density, velocity, angle, target_density)| ImpactorSpec {
            diameter,
            density,
            velocity,
            angle,
            target_density,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every impactor lands in exactly one regime, and the regime determines
    /// which of ground velocity and burst altitude exist.
    #[test]
    fn prop_classifier_total_and_exclusive(spec in impactor()) {
        let regime = classify_entry(&spec, &ImpactConfig::default());
        let flags = [regime.is_intact(), regime.is_airburst(), regime.is_ground_cloud()];
        prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);

        match regime.ground_velocity() {
            Some(v) => {
                prop_assert!(!regime.is_airburst());
                prop_assert!(v.is_finite() && v >= 0.0 && v <= spec.velocity);
            }
            None => prop_assert!(regime.is_airburst()),
        }
        if regime.is_airburst() {
            prop_assert!(regime.burst_altitude() > 0.0);
            prop_assert!(regime.burst_altitude() < regime.breakup_altitude());
        } else {
            prop_assert_eq!(regime.burst_altitude(), 0.0);
        }
    }

    /// Bodies far stronger than the ram pressure never take the breakup path.
    #[test]
    fn prop_strong_bodies_stay_intact(
        diameter in 0.1f64..1.0,
        density in 7000.0f64..8000.0,
        velocity in 1000.0f64..3000.0,
        angle in 60.0f64..=90.0,
    ) {
        let spec = ImpactorSpec { diameter, density, velocity, angle, target_density: 2500.0 };
        let parameter = breakup_parameter(&spec, breakup_strength(density), &Atmosphere::default());
        prop_assert!(parameter >= 1.0);
        prop_assert!(classify_entry(&spec, &ImpactConfig::default()).is_intact());
    }

    /// A grazing path never decelerates, whatever the body.
    #[test]
    fn prop_grazing_keeps_entry_velocity(
        velocity in 1.0f64..1.0e5,
        diameter in 0.1f64..1.0e4,
        density in 100.0f64..1.0e4,
        z in 0.0f64..2.0e5,
    ) {
        let v = velocity_at_altitude(velocity, diameter, density, 0.0, z, &Atmosphere::default());
        prop_assert_eq!(v, velocity);
    }

    /// Negative magnitudes saturate at the lowest band, large ones at the highest.
    #[test]
    fn prop_intensity_saturates(m in -50.0f64..50.0) {
        let band = MercalliBand::from_magnitude(m);
        if m <= 0.0 {
            prop_assert_eq!(band.index(), 0);
        } else if m >= 9.0 {
            prop_assert_eq!(band.index(), 9);
        } else {
            prop_assert_eq!(band.index(), m.floor() as usize);
        }
    }
}

proptest! {
    // Each case sweeps the full 20 000-row table
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_outcome_invariants(spec in impactor()) {
        let config = ImpactConfig::default().with_parallel(false);
        let outcome = compute_impact_with(&spec, &config).expect("strategy yields valid impactors");
        assertions::assert_energy_partition(&outcome, 1e-9);
        assertions::assert_regime_consistent(&outcome);
        assertions::assert_no_nan_rows(&outcome);

        let first = &outcome.effects.rows()[0];
        prop_assert_eq!(first.thermal_exposure, f64::INFINITY);
        if outcome.crater.is_some() {
            prop_assert_eq!(first.ejecta_thickness, Some(f64::INFINITY));
            prop_assert_eq!(first.ejecta_mean_size, Some(f64::INFINITY));
        }
    }
}
