use std::fmt;

use serde::Serialize;

/// Canonical water/steam phase designations.
///
/// Downstream property-lookup code matches on these variants to decide which
/// table to query. The published order is part of the public contract; do not
/// reorder or rename variants once released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SteamPhase {
    SaturatedLiquid,
    SaturatedVapour,
    SaturatedMixture,
    CompressedLiquid,
    SuperheatedWater,
}

impl SteamPhase {
    /// All phases, in published order.
    pub const ALL: [SteamPhase; 5] = [
        SteamPhase::SaturatedLiquid,
        SteamPhase::SaturatedVapour,
        SteamPhase::SaturatedMixture,
        SteamPhase::CompressedLiquid,
        SteamPhase::SuperheatedWater,
    ];

    /// Human-readable phase name.
    pub fn label(self) -> &'static str {
        match self {
            SteamPhase::SaturatedLiquid => "Saturated Liquid",
            SteamPhase::SaturatedVapour => "Saturated Vapor",
            SteamPhase::SaturatedMixture => "Saturated Mixture",
            SteamPhase::CompressedLiquid => "Compressed Liquid",
            SteamPhase::SuperheatedWater => "Superheated Water",
        }
    }

    /// Representative quality (dryness fraction) for the phase.
    ///
    /// This is a discriminant, not a computed property: liquid-like phases
    /// report 0, vapor-like phases 1, and the two-phase mixture carries the
    /// out-of-range sentinel 1.5 until a lookup supplies an actual dryness
    /// fraction.
    pub fn quality(self) -> f64 {
        match self {
            SteamPhase::SaturatedLiquid | SteamPhase::CompressedLiquid => 0.0,
            SteamPhase::SaturatedVapour | SteamPhase::SuperheatedWater => 1.0,
            SteamPhase::SaturatedMixture => 1.5,
        }
    }
}

impl fmt::Display for SteamPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
