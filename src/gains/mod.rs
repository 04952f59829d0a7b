//! Per-category heat gain calculators.
//!
//! Each calculator is a pure function of the room input, the resolved
//! coefficient set and the constant table. [`GainBreakdown::compute`] runs
//! all of them and records one unrounded scalar per category; rounding only
//! happens later, at aggregation.

pub mod conduction;
pub mod internal;
pub mod outside_air;

use crate::coefficients::CoefficientSet;
use crate::constants::ConstantTable;
use crate::input::{Orientation, PartitionClass, RoomInput};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

pub use internal::OccupantGain;

/// Unrounded heat gain per category, W.
///
/// Wall entries follow [`Orientation::ALL`] order (west, east, north,
/// south); partition entries follow [`PartitionClass::ALL`] order (the two
/// unconditioned classes, then the two conditioned ones).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GainBreakdown {
    pub ceiling: FloatValue,
    pub walls: [FloatValue; 4],
    pub partitions: [FloatValue; 4],
    pub floor: FloatValue,
    pub lighting: FloatValue,
    pub equipment: FloatValue,
    pub occupants_sensible: FloatValue,
    pub occupants_latent: FloatValue,
    pub air_sensible: FloatValue,
    pub air_latent: FloatValue,
}

impl GainBreakdown {
    /// Run every calculator for one room.
    pub fn compute(input: &RoomInput, constants: &ConstantTable) -> Self {
        let input = input.sanitized();
        let coefficients = CoefficientSet::resolve(input.construction, constants);

        let mut walls = [0.0; 4];
        for (slot, orientation) in walls.iter_mut().zip(Orientation::ALL) {
            *slot = conduction::wall_gain(&input, &coefficients, constants, orientation);
        }

        let mut partitions = [0.0; 4];
        for (slot, class) in partitions.iter_mut().zip(PartitionClass::ALL) {
            *slot = conduction::partition_gain(&input, &coefficients, constants, class);
        }

        let occupants = internal::occupant_gain(&input, constants);

        Self {
            ceiling: conduction::ceiling_gain(&input, &coefficients, constants),
            walls,
            partitions,
            floor: conduction::floor_gain(&input, &coefficients, constants),
            lighting: internal::lighting_gain(&input, constants),
            equipment: internal::equipment_gain(&input, constants),
            occupants_sensible: occupants.sensible,
            occupants_latent: occupants.latent,
            air_sensible: outside_air::sensible_gain(&input, constants),
            air_latent: outside_air::latent_gain(&input, constants),
        }
    }

    /// Gain through the wall facing `orientation`, W.
    pub fn wall(&self, orientation: Orientation) -> FloatValue {
        self.walls[orientation as usize]
    }

    /// Gain through the partition of `class`, W.
    pub fn partition(&self, class: PartitionClass) -> FloatValue {
        self.partitions[class as usize]
    }
}
