//! Grouping and rounding of the per-category gains.

use crate::gains::GainBreakdown;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Watts per ton of refrigeration.
pub const WATTS_PER_TON: FloatValue = 3517.0;

/// Aggregated thermal load of one room.
///
/// Group totals and the grand totals are rounded up (ceiling); the unrounded
/// per-category breakdown is kept alongside for audit and display. Each
/// reported group equals the ceiling of the sum of its unrounded components,
/// and the grand total in watts is the ceiling of the sum of every unrounded
/// category, so sizing can never under-report a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalResult {
    /// Ceiling plus the four exterior walls, W.
    pub external_w: FloatValue,
    /// The four partition classes, W.
    pub partitions_w: FloatValue,
    pub floor_w: FloatValue,
    pub lighting_w: FloatValue,
    pub equipment_w: FloatValue,
    /// Occupant sensible plus latent, W.
    pub occupants_w: FloatValue,
    /// Outside-air sensible plus latent, W.
    pub air_w: FloatValue,
    /// Grand total, W.
    pub total_w: FloatValue,
    /// Grand total in tons of refrigeration.
    pub total_tr: FloatValue,
    /// Unrounded per-category gains backing the totals above.
    pub breakdown: GainBreakdown,
}

impl ThermalResult {
    /// Aggregate a breakdown into rounded group totals.
    pub fn from_breakdown(breakdown: &GainBreakdown) -> Self {
        let external = breakdown.ceiling + breakdown.walls.iter().sum::<FloatValue>();
        let partitions = breakdown.partitions.iter().sum::<FloatValue>();
        let occupants = breakdown.occupants_sensible + breakdown.occupants_latent;
        let air = breakdown.air_sensible + breakdown.air_latent;

        let grand = external
            + partitions
            + breakdown.floor
            + breakdown.lighting
            + breakdown.equipment
            + occupants
            + air;
        let total_w = grand.ceil();

        Self {
            external_w: external.ceil(),
            partitions_w: partitions.ceil(),
            floor_w: breakdown.floor.ceil(),
            lighting_w: breakdown.lighting.ceil(),
            equipment_w: breakdown.equipment.ceil(),
            occupants_w: occupants.ceil(),
            air_w: air.ceil(),
            total_w,
            total_tr: (total_w / WATTS_PER_TON).ceil(),
            breakdown: breakdown.clone(),
        }
    }
}
