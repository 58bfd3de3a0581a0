//! Impact Effects - Asteroid Impact Consequence Models
//!
//! A library crate estimating what happens when an asteroid hits the Earth:
//! energy, atmospheric breakup, crater size, and a per-kilometre table of
//! thermal, seismic, ejecta and blast effects out to 20 000 km.

pub mod config;
pub mod crater;
pub mod effects;
pub mod entry;
pub mod input;
pub mod outcome;
pub mod scenarios;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::{Atmosphere, ImpactConfig, TargetMaterial};
pub use entry::EntryRegime;
pub use input::{ImpactError, ImpactorSpec};
pub use outcome::{ImpactOutcome, compute_impact, compute_impact_with};
