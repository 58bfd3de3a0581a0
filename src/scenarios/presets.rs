//! Preset scenario definitions.
//!
//! Sizes and speeds are rounded estimates of well-known events, chosen to
//! exercise each entry regime rather than to reproduce the events exactly.

use crate::input::ImpactorSpec;
use crate::types::SEAWATER_DENSITY;

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    REFERENCE,
    CHELYABINSK,
    TUNGUSKA,
    IRON_METEORITE,
    OCEAN_IMPACT,
    CHICXULUB,
];

/// Scenario 1: Reference impact
///
/// A 300 m rubble-pile body at 18 km/s. Fragments at ~74 km but the debris
/// cloud still strikes the ground and excavates a complex crater.
pub static REFERENCE: Scenario = Scenario {
    id: "reference",
    name: "Reference Impact",
    description: "300 m stony body at 18 km/s, 45°. Fragment cloud reaches the ground.",
    impactor: ImpactorSpec {
        diameter: 300.0,
        density: 1600.0,
        velocity: 18_000.0,
        angle: 45.0,
        target_density: 2500.0,
    },
};

/// Scenario 2: Chelyabinsk-like airburst
///
/// A ~20 m chondrite on a shallow 18° path. Disperses tens of kilometers up.
pub static CHELYABINSK: Scenario = Scenario {
    id: "chelyabinsk",
    name: "Chelyabinsk Airburst",
    description: "20 m chondrite at 19 km/s on a shallow path. High-altitude airburst.",
    impactor: ImpactorSpec {
        diameter: 20.0,
        density: 3300.0,
        velocity: 19_000.0,
        angle: 18.0,
        target_density: 2500.0,
    },
};

/// Scenario 3: Tunguska-like airburst
pub static TUNGUSKA: Scenario = Scenario {
    id: "tunguska",
    name: "Tunguska Airburst",
    description: "60 m low-density body at 27 km/s. Megaton-class airburst, no crater.",
    impactor: ImpactorSpec {
        diameter: 60.0,
        density: 1500.0,
        velocity: 27_000.0,
        angle: 35.0,
        target_density: 2500.0,
    },
};

/// Scenario 4: Iron meteorite fall
///
/// A 1 m iron falling vertically is strong enough to survive entry intact,
/// decelerating to a few km/s before punching a small simple crater.
pub static IRON_METEORITE: Scenario = Scenario {
    id: "iron_meteorite",
    name: "Iron Meteorite",
    description: "1 m iron at 12 km/s, vertical. Survives entry intact.",
    impactor: ImpactorSpec {
        diameter: 1.0,
        density: 7800.0,
        velocity: 12_000.0,
        angle: 90.0,
        target_density: 2500.0,
    },
};

/// Scenario 5: Ocean impact
///
/// Target density is seawater. Pair with `TargetMaterial::Water` for the
/// water crater constant.
pub static OCEAN_IMPACT: Scenario = Scenario {
    id: "ocean_impact",
    name: "Ocean Impact",
    description: "1 km stony asteroid into the open ocean at 20 km/s.",
    impactor: ImpactorSpec {
        diameter: 1000.0,
        density: 3000.0,
        velocity: 20_000.0,
        angle: 45.0,
        target_density: SEAWATER_DENSITY,
    },
};

/// Scenario 6: Chicxulub-like extinction event
pub static CHICXULUB: Scenario = Scenario {
    id: "chicxulub",
    name: "Chicxulub",
    description: "15 km asteroid at 20 km/s. Global-scale effects.",
    impactor: ImpactorSpec {
        diameter: 15_000.0,
        density: 2600.0,
        velocity: 20_000.0,
        angle: 60.0,
        target_density: 2700.0,
    },
};
