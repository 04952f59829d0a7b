//! Engineering constant table.
//!
//! All coefficients consumed by the gain calculators live in a single named
//! table that is populated once at application start by an external loader
//! (see [`loader`]) and read-only afterwards. Calculators never look a key up
//! directly; they go through [`ConstantTable::resolve`], which consults one
//! declarative defaults table when a key is absent. Centralizing the
//! fallbacks keeps every historical default auditable in one place.
//!
//! # Required Keys
//!
//! [`REQUIRED_KEYS`] enumerates the 23 keys a usable table must provide.
//! [`ConstantTable::validate`] reports the exact missing subset; a
//! calculation run aborts when that subset is non-empty. Three outside-air
//! keys (`AUX_Delta_T_Ar`, `AUX_Fator_Latente_Ar`, `AUX_Delta_Ua_Ar`) are
//! read with fallbacks but have historically been optional, so they are not
//! part of the required list.

pub mod loader;

use crate::errors::EngineResult;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key names of the engineering constant table.
///
/// The names are preserved from the legacy configuration so that existing
/// constants files keep working unchanged.
pub mod keys {
    /// Wall thermal transmittance for prefabricated electrical houses, W/(m^2 K)
    pub const U_PAREDE_ELETROCENTRO: &str = "AUX_U_Value_Parede_Eletrocentro";
    /// Ceiling thermal transmittance for prefabricated electrical houses, W/(m^2 K)
    pub const U_TETO_ELETROCENTRO: &str = "AUX_U_Value_Teto_Eletrocentro";
    /// Wall thermal transmittance for masonry construction, W/(m^2 K)
    pub const U_PAREDE_ALVENARIA: &str = "AUX_U_Value_Parede_Alvenaria";
    /// Ceiling thermal transmittance for masonry construction, W/(m^2 K)
    pub const U_TETO_ALVENARIA: &str = "AUX_U_Value_Teto_Alvenaria";
    /// Floor thermal transmittance, independent of construction type, W/(m^2 K)
    pub const U_PISO: &str = "AUX_U_Value_Piso";

    /// Design temperature differential across the floor, K
    pub const DELTA_T_PISO: &str = "AUX_Delta_T_Piso";
    /// Design temperature differential across the ceiling, K
    pub const DELTA_T_TETO: &str = "AUX_Delta_T_Teto";
    /// Design temperature differential, west-facing wall, K
    pub const DELTA_T_PAREDE_OESTE: &str = "AUX_Delta_T_Parede_Oeste";
    /// Design temperature differential, east-facing wall, K
    pub const DELTA_T_PAREDE_LESTE: &str = "AUX_Delta_T_Parede_Leste";
    /// Design temperature differential, north-facing wall, K
    pub const DELTA_T_PAREDE_NORTE: &str = "AUX_Delta_T_Parede_Norte";
    /// Design temperature differential, south-facing wall, K
    pub const DELTA_T_PAREDE_SUL: &str = "AUX_Delta_T_Parede_Sul";
    /// Design temperature differential, first partition to unconditioned space, K
    pub const DELTA_T_DIVISORIA_NC1: &str = "AUX_Delta_T_Divisoria_NC1";
    /// Design temperature differential, second partition to unconditioned space, K
    pub const DELTA_T_DIVISORIA_NC2: &str = "AUX_Delta_T_Divisoria_NC2";
    /// Design temperature differential, first partition to conditioned space, K
    pub const DELTA_T_DIVISORIA_C1: &str = "AUX_Delta_T_Divisoria_C1";
    /// Design temperature differential, second partition to conditioned space, K
    pub const DELTA_T_DIVISORIA_C2: &str = "AUX_Delta_T_Divisoria_C2";

    /// Sensible heat gain per occupant, W
    pub const CSP_PESSOAS: &str = "AUX_Csp_Pessoas";
    /// Latent heat gain per occupant, W
    pub const CLP_PESSOAS: &str = "AUX_Clp_Pessoas";

    /// Lighting power density, W/m^2
    pub const FATOR_ILUMINACAO: &str = "AUX_Fator_Iluminacao";
    /// Safety multiplier applied to the lighting gain, dimensionless
    pub const FATOR_SEGURANCA_ILUMINACAO: &str = "AUX_Fator_Seguranca_Iluminacao";

    /// Conversion factor applied to panel dissipation given in kW
    pub const FATOR_CONVERSAO_DISSIPACAO: &str = "AUX_Fator_Conversao_Dissipacao";
    /// Panel dissipation safety factor, percent
    pub const FATOR_SEGURANCA_PAINEIS: &str = "AUX_Fator_Seguranca_Paineis";

    /// Outside air density, kg/m^3
    pub const DENSIDADE_AR: &str = "AUX_Densidade_Ar";
    /// Specific heat of air, kcal/(kg K)
    pub const CALOR_ESPECIFICO_AR: &str = "AUX_Calor_Especifico_Ar";

    /// Design temperature differential between outside and room air, K
    pub const DELTA_T_AR: &str = "AUX_Delta_T_Ar";
    /// Latent conversion factor for outside-air flow
    pub const FATOR_LATENTE_AR: &str = "AUX_Fator_Latente_Ar";
    /// Design humidity ratio differential between outside and room air, g/kg
    pub const DELTA_UA_AR: &str = "AUX_Delta_Ua_Ar";
}

/// Keys that must be present for a calculation run to proceed.
pub const REQUIRED_KEYS: [&str; 23] = [
    keys::U_PAREDE_ELETROCENTRO,
    keys::U_TETO_ELETROCENTRO,
    keys::U_PAREDE_ALVENARIA,
    keys::U_TETO_ALVENARIA,
    keys::U_PISO,
    keys::DELTA_T_PISO,
    keys::DELTA_T_TETO,
    keys::DELTA_T_PAREDE_OESTE,
    keys::DELTA_T_PAREDE_LESTE,
    keys::DELTA_T_PAREDE_NORTE,
    keys::DELTA_T_PAREDE_SUL,
    keys::DELTA_T_DIVISORIA_NC1,
    keys::DELTA_T_DIVISORIA_NC2,
    keys::DELTA_T_DIVISORIA_C1,
    keys::DELTA_T_DIVISORIA_C2,
    keys::CSP_PESSOAS,
    keys::CLP_PESSOAS,
    keys::FATOR_ILUMINACAO,
    keys::FATOR_SEGURANCA_ILUMINACAO,
    keys::FATOR_CONVERSAO_DISSIPACAO,
    keys::FATOR_SEGURANCA_PAINEIS,
    keys::DENSIDADE_AR,
    keys::CALOR_ESPECIFICO_AR,
];

/// Fallback values used by [`ConstantTable::resolve`] when a key is absent.
///
/// The values carried over from the legacy sizing sheets are kept verbatim
/// so that historical outputs reproduce exactly. Whether some of them are
/// intentional engineering defaults or were masking an incomplete
/// configuration is still under domain review; do not retune them here.
const DEFAULTS: [(&str, FloatValue); 26] = [
    (keys::U_PAREDE_ELETROCENTRO, 1.12),
    (keys::U_TETO_ELETROCENTRO, 1.145),
    (keys::U_PAREDE_ALVENARIA, 2.546),
    (keys::U_TETO_ALVENARIA, 3.961),
    (keys::U_PISO, 2.7),
    (keys::DELTA_T_PISO, 5.0),
    (keys::DELTA_T_TETO, 20.0),
    (keys::DELTA_T_PAREDE_OESTE, 11.0),
    (keys::DELTA_T_PAREDE_LESTE, 8.0),
    (keys::DELTA_T_PAREDE_NORTE, 6.0),
    (keys::DELTA_T_PAREDE_SUL, 5.0),
    (keys::DELTA_T_DIVISORIA_NC1, 8.0),
    (keys::DELTA_T_DIVISORIA_NC2, 8.0),
    (keys::DELTA_T_DIVISORIA_C1, 2.0),
    (keys::DELTA_T_DIVISORIA_C2, 2.0),
    (keys::CSP_PESSOAS, 75.0),
    (keys::CLP_PESSOAS, 55.0),
    (keys::FATOR_ILUMINACAO, 7.0),
    (keys::FATOR_SEGURANCA_ILUMINACAO, 1.25),
    (keys::FATOR_CONVERSAO_DISSIPACAO, 1000.0),
    (keys::FATOR_SEGURANCA_PAINEIS, 100.0),
    (keys::DENSIDADE_AR, 1.2),
    (keys::CALOR_ESPECIFICO_AR, 0.24),
    (keys::DELTA_T_AR, 11.0),
    (keys::FATOR_LATENTE_AR, 3.01),
    (keys::DELTA_UA_AR, 4.5),
];

/// Fallback value for a known key, `None` for keys outside the defaults table.
pub fn default_for(key: &str) -> Option<FloatValue> {
    DEFAULTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// An immutable mapping of named engineering coefficients.
///
/// Serializes as a flat `name = value` table, which is also the on-disk TOML
/// layout of the external constants file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantTable {
    values: BTreeMap<String, FloatValue>,
}

impl ConstantTable {
    /// Build a table from key/value pairs.
    pub fn from_values<K, I>(values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FloatValue)>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Parse a table from the contents of a TOML constants file.
    pub fn from_toml_str(contents: &str) -> EngineResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Raw lookup without fallback.
    pub fn get(&self, key: &str) -> Option<FloatValue> {
        self.values.get(key).copied()
    }

    /// Resolved lookup: the stored value, else the declarative default,
    /// else zero for keys nothing ever defaulted.
    pub fn resolve(&self, key: &str) -> FloatValue {
        self.get(key).or_else(|| default_for(key)).unwrap_or(0.0)
    }

    /// Check presence of every required key.
    ///
    /// Returns the exact missing subset of [`REQUIRED_KEYS`] on failure, in
    /// the order the required list enumerates them.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !self.values.contains_key(**key))
            .map(|key| (*key).to_owned())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FloatValue)> for ConstantTable {
    fn from_iter<I: IntoIterator<Item = (K, FloatValue)>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A table holding every required key, each set to its default value.
    pub(crate) fn complete_table() -> ConstantTable {
        REQUIRED_KEYS
            .iter()
            .map(|key| (*key, default_for(key).unwrap()))
            .collect()
    }
}
