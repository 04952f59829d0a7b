//! Internal gains: lighting, panel dissipation and occupants.

use crate::constants::{keys, ConstantTable};
use crate::input::RoomInput;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Rooms are sized for full occupancy.
const OCCUPANCY_PERCENT: FloatValue = 100.0;

/// Lighting gain, W: floor area times the lighting power density times its
/// safety multiplier.
pub fn lighting_gain(input: &RoomInput, constants: &ConstantTable) -> FloatValue {
    input.floor_area
        * constants.resolve(keys::FATOR_ILUMINACAO)
        * constants.resolve(keys::FATOR_SEGURANCA_ILUMINACAO)
}

/// Panel dissipation gain, W.
///
/// The rated dissipation arrives in kW; the conversion factor scales it to
/// watts and the safety factor is expressed in percent, hence the final
/// division by 100.
pub fn equipment_gain(input: &RoomInput, constants: &ConstantTable) -> FloatValue {
    constants.resolve(keys::FATOR_CONVERSAO_DISSIPACAO)
        * input.equipment_kw
        * constants.resolve(keys::FATOR_SEGURANCA_PAINEIS)
        / 100.0
}

/// Sensible and latent occupant gains, W.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupantGain {
    pub sensible: FloatValue,
    pub latent: FloatValue,
}

impl OccupantGain {
    pub fn total(&self) -> FloatValue {
        self.sensible + self.latent
    }
}

/// Occupant gain from the per-person sensible and latent factors.
pub fn occupant_gain(input: &RoomInput, constants: &ConstantTable) -> OccupantGain {
    let occupancy = OCCUPANCY_PERCENT / 100.0;
    OccupantGain {
        sensible: constants.resolve(keys::CSP_PESSOAS) * input.occupants * occupancy,
        latent: constants.resolve(keys::CLP_PESSOAS) * input.occupants * occupancy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> ConstantTable {
        ConstantTable::from_values([
            (keys::FATOR_ILUMINACAO, 7.0),
            (keys::FATOR_SEGURANCA_ILUMINACAO, 1.25),
            (keys::FATOR_CONVERSAO_DISSIPACAO, 1000.0),
            (keys::FATOR_SEGURANCA_PAINEIS, 80.0),
            (keys::CSP_PESSOAS, 75.0),
            (keys::CLP_PESSOAS, 55.0),
        ])
    }

    #[test]
    fn test_lighting_gain() {
        let input = RoomInput {
            floor_area: 30.0,
            ..RoomInput::default()
        };
        // 30 m^2 x 7 W/m^2 x 1.25
        assert_relative_eq!(lighting_gain(&input, &table()), 262.5, epsilon = 1e-9);
    }

    #[test]
    fn test_equipment_gain_scales_percent_safety_factor() {
        let input = RoomInput {
            equipment_kw: 2.5,
            ..RoomInput::default()
        };
        // 1000 x 2.5 kW x 80 / 100
        assert_relative_eq!(equipment_gain(&input, &table()), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_occupant_gain_splits_sensible_and_latent() {
        let input = RoomInput {
            occupants: 4.0,
            ..RoomInput::default()
        };
        let gain = occupant_gain(&input, &table());
        assert_relative_eq!(gain.sensible, 300.0, epsilon = 1e-9);
        assert_relative_eq!(gain.latent, 220.0, epsilon = 1e-9);
        assert_relative_eq!(gain.total(), 520.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_room_has_no_internal_gains() {
        let input = RoomInput::default();
        assert_eq!(lighting_gain(&input, &table()), 0.0);
        assert_eq!(equipment_gain(&input, &table()), 0.0);
        assert_eq!(occupant_gain(&input, &table()).total(), 0.0);
    }
}
