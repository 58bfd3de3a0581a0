//! Test utilities for impact model tests.
//!
//! Provides fixtures for representative impactors in each entry regime and
//! assertions for the invariants every outcome must satisfy.

/// Fixtures for creating test impactors.
pub mod fixtures {
    use crate::input::ImpactorSpec;

    /// The documented reference scenario: a 300 m stony body at 18 km/s.
    ///
    /// Breaks up high in the stratosphere but the cloud reaches the ground.
    pub fn reference_impactor() -> ImpactorSpec {
        ImpactorSpec::new(300.0, 1600.0, 18_000.0, 45.0, 2500.0).expect("valid reference impactor")
    }

    /// A ~20 m chondrite on a shallow path. Disperses completely in the air.
    pub fn chelyabinsk_like() -> ImpactorSpec {
        ImpactorSpec::new(20.0, 3300.0, 19_000.0, 18.0, 2500.0).expect("valid airburst impactor")
    }

    /// A 1 m iron falling vertically. Too strong to fail, reaches the ground intact.
    pub fn iron_impactor() -> ImpactorSpec {
        ImpactorSpec::new(1.0, 7800.0, 12_000.0, 90.0, 2500.0).expect("valid intact impactor")
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use crate::outcome::ImpactOutcome;

    /// Assert that ground and air energy are non-negative and sum to E0.
    ///
    /// # Panics
    /// Panics if the relative mismatch exceeds tolerance.
    pub fn assert_energy_partition(outcome: &ImpactOutcome, tolerance: f64) {
        let e0 = outcome.initial_energy;
        let sum = outcome.ground_energy + outcome.air_energy;
        assert!(
            outcome.ground_energy >= 0.0 && outcome.air_energy >= 0.0,
            "Negative energy: ground={:.6e}, air={:.6e}",
            outcome.ground_energy,
            outcome.air_energy
        );
        let drift = ((sum - e0) / e0).abs();
        assert!(
            drift <= tolerance,
            "Energy not partitioned: E0={e0:.6e}, ground+air={sum:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert the regime, crater and seismic fields agree with each other.
    pub fn assert_regime_consistent(outcome: &ImpactOutcome) {
        let regime = &outcome.regime;
        if regime.is_airburst() {
            assert!(outcome.ground_velocity().is_none());
            assert!(outcome.crater.is_none());
            assert_eq!(outcome.ground_energy, 0.0);
        } else {
            assert!(outcome.ground_velocity().is_some());
        }
        assert_eq!(
            outcome.crater.is_some(),
            outcome.ground_energy > 0.0 && !regime.is_airburst()
        );
        assert_eq!(outcome.seismic_magnitude.is_some(), outcome.ground_energy > 0.0);
    }

    /// Assert no row of the effects table carries a NaN.
    pub fn assert_no_nan_rows(outcome: &ImpactOutcome) {
        for row in outcome.effects.iter() {
            let values = [
                Some(row.thermal_exposure),
                Some(row.overpressure),
                Some(row.peak_wind),
                row.effective_magnitude,
                row.ejecta_thickness,
                row.ejecta_mean_size,
            ];
            assert!(
                values.iter().flatten().all(|v| !v.is_nan()),
                "NaN in row {}: {row:?}",
                row.distance_km
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImpactConfig;
    use crate::entry::classify_entry;

    #[test]
    fn test_fixtures_cover_every_regime() {
        let config = ImpactConfig::default();
        assert!(classify_entry(&fixtures::reference_impactor(), &config).is_ground_cloud());
        assert!(classify_entry(&fixtures::chelyabinsk_like(), &config).is_airburst());
        assert!(classify_entry(&fixtures::iron_impactor(), &config).is_intact());
    }
}
