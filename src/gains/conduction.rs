//! Conduction gains through the room envelope.
//!
//! Every formula is the classic steady-state conduction expression
//! `Q = A x U x dT`: surface area times thermal transmittance times the
//! design temperature differential for that surface. Wall and partition
//! areas come from length x ceiling height; ceiling and floor use the floor
//! area directly.

use crate::coefficients::CoefficientSet;
use crate::constants::{keys, ConstantTable};
use crate::input::{Orientation, PartitionClass, RoomInput};
use crate::FloatValue;

/// Gain through the ceiling, W.
pub fn ceiling_gain(
    input: &RoomInput,
    coefficients: &CoefficientSet,
    constants: &ConstantTable,
) -> FloatValue {
    input.floor_area * coefficients.ceiling_u * constants.resolve(keys::DELTA_T_TETO)
}

/// Gain through one exterior wall, W.
pub fn wall_gain(
    input: &RoomInput,
    coefficients: &CoefficientSet,
    constants: &ConstantTable,
    orientation: Orientation,
) -> FloatValue {
    let area = input.walls.get(orientation) * input.ceiling_height;
    area * coefficients.wall_u * constants.resolve(orientation.delta_t_key())
}

/// Gain through one interior partition, W.
///
/// Partitions share the wall transmittance of the construction type; only
/// the temperature differential differs per class.
pub fn partition_gain(
    input: &RoomInput,
    coefficients: &CoefficientSet,
    constants: &ConstantTable,
    class: PartitionClass,
) -> FloatValue {
    let area = input.partitions.get(class) * input.ceiling_height;
    area * coefficients.wall_u * constants.resolve(class.delta_t_key())
}

/// Gain through the floor, W.
pub fn floor_gain(
    input: &RoomInput,
    coefficients: &CoefficientSet,
    constants: &ConstantTable,
) -> FloatValue {
    input.floor_area * coefficients.floor_u * constants.resolve(keys::DELTA_T_PISO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ConstructionType;
    use approx::assert_relative_eq;

    fn table() -> ConstantTable {
        ConstantTable::from_values([
            (keys::U_PAREDE_ALVENARIA, 2.546),
            (keys::U_TETO_ALVENARIA, 3.961),
            (keys::U_PISO, 2.7),
            (keys::DELTA_T_TETO, 20.0),
            (keys::DELTA_T_PISO, 5.0),
            (keys::DELTA_T_PAREDE_OESTE, 5.0),
            (keys::DELTA_T_PAREDE_LESTE, 8.0),
            (keys::DELTA_T_DIVISORIA_NC1, 8.0),
            (keys::DELTA_T_DIVISORIA_C1, 2.0),
        ])
    }

    fn masonry_room() -> (RoomInput, CoefficientSet) {
        let mut input = RoomInput {
            floor_area: 30.0,
            ceiling_height: 3.0,
            construction: ConstructionType::Alvenaria,
            ..RoomInput::default()
        };
        input.walls.west = 10.0;
        input.walls.east = 6.0;
        input.partitions.unconditioned_a = 4.0;
        input.partitions.conditioned_a = 5.0;
        let coefficients = CoefficientSet::resolve(input.construction, &table());
        (input, coefficients)
    }

    #[test]
    fn test_ceiling_gain() {
        let (input, coefficients) = masonry_room();
        // 30 m^2 x 3.961 x 20 K
        assert_relative_eq!(
            ceiling_gain(&input, &coefficients, &table()),
            2376.6,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_wall_gain_uses_orientation_delta_t() {
        let (input, coefficients) = masonry_room();
        // 10 m x 3 m x 2.546 x 5 K
        assert_relative_eq!(
            wall_gain(&input, &coefficients, &table(), Orientation::West),
            381.9,
            epsilon = 1e-9
        );
        // 6 m x 3 m x 2.546 x 8 K
        assert_relative_eq!(
            wall_gain(&input, &coefficients, &table(), Orientation::East),
            366.624,
            epsilon = 1e-9
        );
        // No length recorded for this orientation.
        assert_eq!(
            wall_gain(&input, &coefficients, &table(), Orientation::North),
            0.0
        );
    }

    #[test]
    fn test_partition_gain_uses_class_delta_t() {
        let (input, coefficients) = masonry_room();
        // 4 m x 3 m x 2.546 x 8 K
        assert_relative_eq!(
            partition_gain(&input, &coefficients, &table(), PartitionClass::UnconditionedA),
            244.416,
            epsilon = 1e-9
        );
        // 5 m x 3 m x 2.546 x 2 K
        assert_relative_eq!(
            partition_gain(&input, &coefficients, &table(), PartitionClass::ConditionedA),
            76.38,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_floor_gain() {
        let (input, coefficients) = masonry_room();
        // 30 m^2 x 2.7 x 5 K
        assert_relative_eq!(
            floor_gain(&input, &coefficients, &table()),
            405.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_geometry_means_zero_gain() {
        let input = RoomInput::default();
        let coefficients = CoefficientSet::resolve(ConstructionType::Alvenaria, &table());
        assert_eq!(ceiling_gain(&input, &coefficients, &table()), 0.0);
        assert_eq!(floor_gain(&input, &coefficients, &table()), 0.0);
        for orientation in Orientation::ALL {
            assert_eq!(wall_gain(&input, &coefficients, &table(), orientation), 0.0);
        }
        for class in PartitionClass::ALL {
            assert_eq!(partition_gain(&input, &coefficients, &table(), class), 0.0);
        }
    }
}
