//! Common test utilities for integration tests.

#![allow(dead_code)]

use impact_effects::effects::EffectsRow;
use impact_effects::{ImpactOutcome, ImpactorSpec};

/// The documented 300 m reference impactor.
pub fn reference_impactor() -> ImpactorSpec {
    ImpactorSpec {
        diameter: 300.0,
        density: 1600.0,
        velocity: 18_000.0,
        angle: 45.0,
        target_density: 2500.0,
    }
}

/// A stony body with the given entry angle, otherwise the reference.
pub fn at_angle(angle: f64) -> ImpactorSpec {
    ImpactorSpec {
        angle,
        ..reference_impactor()
    }
}

/// Row at `km`, panicking if the table is short.
pub fn row(outcome: &ImpactOutcome, km: usize) -> &EffectsRow {
    outcome
        .effects
        .get(km)
        .unwrap_or_else(|| panic!("no row at {km} km"))
}

/// True when `v` is a number or positive infinity.
pub fn is_finite_or_pos_inf(v: f64) -> bool {
    v.is_finite() || v == f64::INFINITY
}

/// Check every numeric field of every row is free of NaN.
pub fn assert_table_well_formed(outcome: &ImpactOutcome) {
    for row in &outcome.effects {
        assert!(is_finite_or_pos_inf(row.thermal_exposure), "thermal at {} km", row.distance_km);
        assert!(is_finite_or_pos_inf(row.overpressure), "overpressure at {} km", row.distance_km);
        assert!(is_finite_or_pos_inf(row.peak_wind), "wind at {} km", row.distance_km);
        for v in [
            row.source_magnitude,
            row.effective_magnitude,
            row.ejecta_thickness,
            row.ejecta_mean_size,
        ]
        .into_iter()
        .flatten()
        {
            assert!(!v.is_nan(), "NaN at {} km", row.distance_km);
        }
    }
}
