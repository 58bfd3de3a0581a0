//! Physical constants and unit conversions for impact modelling.
//!
//! Every formula in the crate works in SI units: metres, seconds, joules and
//! kg·m⁻³. Distances in the effects table are integer kilometres and are
//! converted with [`METERS_PER_KM`] before use.

/// Physical constants (SI units)

/// Mean Earth radius (meters)
pub const R_EARTH: f64 = 6_371_000.0;

/// Surface gravity of Earth (m/s²)
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Energy of one kiloton of TNT (joules)
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Energy of one megaton of TNT (joules)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Density of seawater (kg/m³)
pub const SEAWATER_DENSITY: f64 = 1025.0;

/// Ambient surface air pressure used by the peak-wind relation (Pa)
pub const AMBIENT_PRESSURE: f64 = 1.0e5;

/// Speed of sound in surface air (m/s)
pub const SOUND_SPEED: f64 = 330.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Number of rows in the effects table (one per integer km from ground zero).
pub const EFFECTS_TABLE_LEN: usize = 20_000;

/// Convert joules to kilotons of TNT equivalent.
pub fn joules_to_kilotons(joules: f64) -> f64 {
    joules / JOULES_PER_KILOTON
}

/// Convert joules to megatons of TNT equivalent.
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}
