//! Model configuration: atmosphere profile, target material and tunables.
//!
//! [`ImpactConfig::default`] reproduces the fixed constants of the standard
//! model. Callers override single values with the `with_*` builders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::ImpactError;

/// Single-parameter exponential atmosphere.
///
/// Density falls off as `ρ(z) = ρ0 · exp(-z / H)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atmosphere {
    /// Sea-level air density (kg/m³)
    pub surface_density: f64,
    /// Scale height (meters)
    pub scale_height: f64,
    /// Drag coefficient of the impactor (dimensionless)
    pub drag_coefficient: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            surface_density: 1.2250,
            scale_height: 8000.0,
            drag_coefficient: 1.0,
        }
    }
}

impl Atmosphere {
    /// Air density at altitude `z` meters above the surface.
    pub fn density_at(&self, z: f64) -> f64 {
        self.surface_density * (-z / self.scale_height).exp()
    }

    fn validate(&self) -> Result<(), ImpactError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.surface_density) && ok(self.scale_height) && ok(self.drag_coefficient) {
            Ok(())
        } else {
            Err(ImpactError::InvalidAtmosphere {
                surface_density: self.surface_density,
                scale_height: self.scale_height,
                drag_coefficient: self.drag_coefficient,
            })
        }
    }
}

/// Surface material at the impact site. Selects the crater scaling constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetMaterial {
    #[default]
    Rock,
    Water,
}

impl TargetMaterial {
    /// Transient crater scaling constant `C`.
    pub fn crater_constant(self) -> f64 {
        match self {
            TargetMaterial::Rock => 1.161,
            TargetMaterial::Water => 1.365,
        }
    }
}

/// Tunable parameters of the impact model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpactConfig {
    pub atmosphere: Atmosphere,
    pub target: TargetMaterial,
    /// Ratio of pancaked to initial diameter at which the debris cloud is
    /// considered fully dispersed.
    pub pancake_ratio: f64,
    /// Fraction of released energy radiated as heat (`K`).
    pub luminous_efficiency: f64,
    /// Power-law exponent of mean ejecta fragment size with distance.
    pub ejecta_size_exponent: f64,
    /// Build the effects table on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            atmosphere: Atmosphere::default(),
            target: TargetMaterial::Rock,
            pancake_ratio: 3.0,
            luminous_efficiency: 3.0e-3,
            ejecta_size_exponent: 2.65,
            parallel: true,
        }
    }
}

impl ImpactConfig {
    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    pub fn with_target(mut self, target: TargetMaterial) -> Self {
        self.target = target;
        self
    }

    pub fn with_pancake_ratio(mut self, ratio: f64) -> Self {
        self.pancake_ratio = ratio;
        self
    }

    pub fn with_luminous_efficiency(mut self, k: f64) -> Self {
        self.luminous_efficiency = k;
        self
    }

    pub fn with_ejecta_size_exponent(mut self, exponent: f64) -> Self {
        self.ejecta_size_exponent = exponent;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check every parameter is usable by the model.
    pub fn validate(&self) -> Result<(), ImpactError> {
        self.atmosphere.validate()?;

        // sqrt(ratio² - 1) must be real and non-zero
        if !(self.pancake_ratio.is_finite() && self.pancake_ratio > 1.0) {
            return Err(ImpactError::InvalidModelParameter {
                name: "pancake_ratio",
                value: self.pancake_ratio,
            });
        }
        if !(self.luminous_efficiency.is_finite() && self.luminous_efficiency > 0.0) {
            return Err(ImpactError::InvalidModelParameter {
                name: "luminous_efficiency",
                value: self.luminous_efficiency,
            });
        }
        if !(self.ejecta_size_exponent.is_finite() && self.ejecta_size_exponent > 0.0) {
            return Err(ImpactError::InvalidModelParameter {
                name: "ejecta_size_exponent",
                value: self.ejecta_size_exponent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_atmosphere_density() {
        let atm = Atmosphere::default();
        assert_relative_eq!(atm.density_at(0.0), 1.2250);
        // One scale height up the density drops by a factor of e
        assert_relative_eq!(
            atm.density_at(8000.0),
            1.2250 / std::f64::consts::E,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_crater_constants() {
        assert_eq!(TargetMaterial::Rock.crater_constant(), 1.161);
        assert_eq!(TargetMaterial::Water.crater_constant(), 1.365);
        assert_eq!(TargetMaterial::default(), TargetMaterial::Rock);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ImpactConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_pancake_ratio() {
        let config = ImpactConfig::default().with_pancake_ratio(1.0);
        assert!(matches!(
            config.validate(),
            Err(ImpactError::InvalidModelParameter { name: "pancake_ratio", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_atmosphere() {
        let config = ImpactConfig::default().with_atmosphere(Atmosphere {
            scale_height: 0.0,
            ..Atmosphere::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ImpactError::InvalidAtmosphere { .. })
        ));
    }
}
