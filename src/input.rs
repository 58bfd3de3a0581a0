//! Impactor input parameters and validation.
//!
//! Domain violations are the only errors the model reports. Everything past
//! validation is total: singular points produce `+∞` or `None`, never an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::DEG_TO_RAD;

/// Errors raised before any computation begins.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("impactor diameter must be positive and finite, got {0} m")]
    InvalidDiameter(f64),

    #[error("impactor density must be positive and finite, got {0} kg/m³")]
    InvalidDensity(f64),

    #[error("entry velocity must be positive and finite, got {0} m/s")]
    InvalidVelocity(f64),

    #[error("impact angle must lie in (0, 90] degrees, got {0}")]
    InvalidAngle(f64),

    #[error("target density must be positive and finite, got {0} kg/m³")]
    InvalidTargetDensity(f64),

    #[error(
        "invalid atmosphere (surface density {surface_density}, scale height {scale_height}, drag coefficient {drag_coefficient}): all must be positive"
    )]
    InvalidAtmosphere {
        surface_density: f64,
        scale_height: f64,
        drag_coefficient: f64,
    },

    #[error("impact energy {0} J is not representable, inputs are out of range")]
    EnergyOutOfRange(f64),

    #[error("invalid model parameter {name}: {value}")]
    InvalidModelParameter { name: &'static str, value: f64 },
}

/// The five scalar inputs describing an impact.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpactorSpec {
    /// Impactor diameter `L0` (meters)
    pub diameter: f64,
    /// Impactor bulk density `Ui` (kg/m³)
    pub density: f64,
    /// Velocity at the top of the atmosphere `v0` (m/s)
    pub velocity: f64,
    /// Impact angle from the horizontal `T` (degrees)
    pub angle: f64,
    /// Target surface density `Uj` (kg/m³)
    pub target_density: f64,
}

impl ImpactorSpec {
    /// Create a validated impactor spec.
    pub fn new(
        diameter: f64,
        density: f64,
        velocity: f64,
        angle: f64,
        target_density: f64,
    ) -> Result<Self, ImpactError> {
        let spec = Self {
            diameter,
            density,
            velocity,
            angle,
            target_density,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check every field lies in its physical domain.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !is_positive(self.diameter) {
            return Err(ImpactError::InvalidDiameter(self.diameter));
        }
        if !is_positive(self.density) {
            return Err(ImpactError::InvalidDensity(self.density));
        }
        if !is_positive(self.velocity) {
            return Err(ImpactError::InvalidVelocity(self.velocity));
        }
        // NaN fails both comparisons
        if !(self.angle > 0.0 && self.angle <= 90.0) {
            return Err(ImpactError::InvalidAngle(self.angle));
        }
        if !is_positive(self.target_density) {
            return Err(ImpactError::InvalidTargetDensity(self.target_density));
        }
        Ok(())
    }

    /// Impact angle in radians.
    pub fn angle_radians(&self) -> f64 {
        self.angle * DEG_TO_RAD
    }

    /// Impactor mass (kg), treating the body as a sphere.
    pub fn mass(&self) -> f64 {
        std::f64::consts::PI / 6.0 * self.density * self.diameter.powi(3)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_spec() {
        let spec = ImpactorSpec::new(300.0, 1600.0, 18_000.0, 45.0, 2500.0).expect("valid spec");
        assert_relative_eq!(spec.angle_radians(), std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_vertical_impact_allowed() {
        assert!(ImpactorSpec::new(10.0, 3000.0, 20_000.0, 90.0, 2500.0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        assert_eq!(
            ImpactorSpec::new(0.0, 1600.0, 18_000.0, 45.0, 2500.0),
            Err(ImpactError::InvalidDiameter(0.0))
        );
        assert_eq!(
            ImpactorSpec::new(300.0, -1.0, 18_000.0, 45.0, 2500.0),
            Err(ImpactError::InvalidDensity(-1.0))
        );
        assert_eq!(
            ImpactorSpec::new(300.0, 1600.0, 0.0, 45.0, 2500.0),
            Err(ImpactError::InvalidVelocity(0.0))
        );
        assert_eq!(
            ImpactorSpec::new(300.0, 1600.0, 18_000.0, 45.0, 0.0),
            Err(ImpactError::InvalidTargetDensity(0.0))
        );
    }

    #[test]
    fn test_rejects_angle_outside_range() {
        for angle in [0.0, -10.0, 90.000_001, 180.0] {
            assert_eq!(
                ImpactorSpec::new(300.0, 1600.0, 18_000.0, angle, 2500.0),
                Err(ImpactError::InvalidAngle(angle))
            );
        }
        assert!(ImpactorSpec::new(300.0, 1600.0, 18_000.0, f64::NAN, 2500.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ImpactorSpec::new(f64::INFINITY, 1600.0, 18_000.0, 45.0, 2500.0).is_err());
        assert!(ImpactorSpec::new(300.0, 1600.0, f64::NAN, 45.0, 2500.0).is_err());
    }

    #[test]
    fn test_mass() {
        // 1 m water sphere
        let spec = ImpactorSpec::new(1.0, 1000.0, 1.0, 90.0, 1000.0).expect("valid spec");
        assert_relative_eq!(spec.mass(), std::f64::consts::PI / 6.0 * 1000.0);
    }
}
