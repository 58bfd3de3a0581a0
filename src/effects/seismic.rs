//! Seismic shaking with distance.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{METERS_PER_KM, R_EARTH};

/// Qualitative shaking class on the Modified Mercalli Intensity scale.
///
/// Effective magnitudes are bucketed by `floor(max(0, M_eff))` and saturate
/// at [`MercalliBand::TotalDestruction`]: magnitudes above 9 are not
/// extrapolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MercalliBand {
    NotFelt,
    Weak,
    Light,
    Moderate,
    Strong,
    VeryStrong,
    Severe,
    Violent,
    Extreme,
    TotalDestruction,
}

impl MercalliBand {
    /// All bands in ascending order, indexed by class.
    pub const ALL: [MercalliBand; 10] = [
        MercalliBand::NotFelt,
        MercalliBand::Weak,
        MercalliBand::Light,
        MercalliBand::Moderate,
        MercalliBand::Strong,
        MercalliBand::VeryStrong,
        MercalliBand::Severe,
        MercalliBand::Violent,
        MercalliBand::Extreme,
        MercalliBand::TotalDestruction,
    ];

    /// Band for an effective Richter magnitude.
    pub fn from_magnitude(effective_magnitude: f64) -> Self {
        // f64::max maps NaN to 0
        let class = effective_magnitude.max(0.0).floor().min(9.0) as usize;
        Self::ALL[class]
    }

    /// Ordinal class, 0 (not felt) through 9.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Roman-numeral MMI range.
    pub fn label(self) -> &'static str {
        match self {
            MercalliBand::NotFelt => "I",
            MercalliBand::Weak => "I-II",
            MercalliBand::Light => "III-IV",
            MercalliBand::Moderate => "IV-V",
            MercalliBand::Strong => "VI-VII",
            MercalliBand::VeryStrong => "VII-VIII",
            MercalliBand::Severe => "IX-X",
            MercalliBand::Violent => "X-XI",
            MercalliBand::Extreme => "XII",
            MercalliBand::TotalDestruction => "XII",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MercalliBand::NotFelt => "Not felt",
            MercalliBand::Weak => "Felt only by a few people at rest",
            MercalliBand::Light => "Felt indoors, hanging objects swing",
            MercalliBand::Moderate => "Felt by nearly everyone, dishes and windows rattle",
            MercalliBand::Strong => "Furniture moves, weak plaster cracks",
            MercalliBand::VeryStrong => "Considerable damage to poorly built structures",
            MercalliBand::Severe => "Well-built structures damaged, some collapse",
            MercalliBand::Violent => "Most masonry and frame structures destroyed",
            MercalliBand::Extreme => "Few structures left standing",
            MercalliBand::TotalDestruction => "Total destruction",
        }
    }
}

impl std::fmt::Display for MercalliBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}

/// Magnitude felt at `distance_km` from a source of `magnitude`.
///
/// Piecewise attenuation: linear out to 60 km, a second linear law to 700 km,
/// logarithmic in epicentral angle beyond.
pub fn effective_magnitude(magnitude: f64, distance_km: f64) -> f64 {
    if distance_km < 60.0 {
        magnitude - 0.0238 * distance_km
    } else if distance_km < 700.0 {
        magnitude - (0.0048 * distance_km - 1.1644)
    } else {
        magnitude - 1.66 * (distance_km * METERS_PER_KM / R_EARTH).log10() - 6.399
    }
}
