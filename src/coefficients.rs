//! Construction-type dependent thermal transmittance.

use crate::constants::{keys, ConstantTable};
use crate::input::ConstructionType;
use crate::FloatValue;
use log::warn;
use serde::{Deserialize, Serialize};

/// Thermal transmittance coefficients for one calculation, W/(m^2 K).
///
/// Wall and ceiling values depend on the construction type; the floor value
/// always comes from `AUX_U_Value_Piso` regardless of type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    pub wall_u: FloatValue,
    pub ceiling_u: FloatValue,
    pub floor_u: FloatValue,
}

impl CoefficientSet {
    /// Resolve the coefficient set for a construction type.
    ///
    /// An unrecognized type yields zero wall and ceiling coefficients so
    /// that one bad field cannot block the whole calculation; the resulting
    /// envelope under-report is logged rather than silent.
    pub fn resolve(construction: ConstructionType, constants: &ConstantTable) -> Self {
        let (wall_u, ceiling_u) = match construction {
            ConstructionType::Eletrocentro => (
                constants.resolve(keys::U_PAREDE_ELETROCENTRO),
                constants.resolve(keys::U_TETO_ELETROCENTRO),
            ),
            ConstructionType::Alvenaria => (
                constants.resolve(keys::U_PAREDE_ALVENARIA),
                constants.resolve(keys::U_TETO_ALVENARIA),
            ),
            ConstructionType::Unknown => {
                warn!("unrecognized construction type; wall and ceiling gains will be zero");
                (0.0, 0.0)
            }
        };

        Self {
            wall_u,
            ceiling_u,
            floor_u: constants.resolve(keys::U_PISO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_support::complete_table;

    #[test]
    fn test_eletrocentro_coefficients() {
        let set = CoefficientSet::resolve(ConstructionType::Eletrocentro, &complete_table());
        assert_eq!(set.wall_u, 1.12);
        assert_eq!(set.ceiling_u, 1.145);
        assert_eq!(set.floor_u, 2.7);
    }

    #[test]
    fn test_alvenaria_coefficients() {
        let set = CoefficientSet::resolve(ConstructionType::Alvenaria, &complete_table());
        assert_eq!(set.wall_u, 2.546);
        assert_eq!(set.ceiling_u, 3.961);
        assert_eq!(set.floor_u, 2.7);
    }

    #[test]
    fn test_unknown_type_zeroes_wall_and_ceiling_only() {
        let set = CoefficientSet::resolve(ConstructionType::Unknown, &complete_table());
        assert_eq!(set.wall_u, 0.0);
        assert_eq!(set.ceiling_u, 0.0);
        // Floor transmittance is independent of the construction type.
        assert_eq!(set.floor_u, 2.7);
    }

    #[test]
    fn test_stored_values_override_fallbacks() {
        let table = ConstantTable::from_values([
            (crate::constants::keys::U_PAREDE_ALVENARIA, 2.8),
            (crate::constants::keys::U_TETO_ALVENARIA, 4.2),
            (crate::constants::keys::U_PISO, 3.0),
        ]);
        let set = CoefficientSet::resolve(ConstructionType::Alvenaria, &table);
        assert_eq!(set.wall_u, 2.8);
        assert_eq!(set.ceiling_u, 4.2);
        assert_eq!(set.floor_u, 3.0);
    }

    #[test]
    fn test_empty_table_uses_legacy_fallbacks() {
        let set = CoefficientSet::resolve(ConstructionType::Eletrocentro, &ConstantTable::default());
        assert_eq!(set.wall_u, 1.12);
        assert_eq!(set.ceiling_u, 1.145);
        assert_eq!(set.floor_u, 2.7);
    }
}
