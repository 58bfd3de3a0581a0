//! Named reference impactors.
//!
//! Provides a collection of preset impacts spanning every entry regime:
//! - the documented 300 m reference body (ground cloud)
//! - stony airbursts (Chelyabinsk-like, Tunguska-like)
//! - a small intact iron
//! - ocean and continental ground impacts

pub mod presets;

use crate::input::ImpactorSpec;

pub use presets::SCENARIOS;

/// A predefined impact configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    pub impactor: ImpactorSpec,
}

/// Look up a preset by its identifier.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
