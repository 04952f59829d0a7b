//! Outside-air gains.
//!
//! The sensible branch follows the legacy sizing sheets: the volumetric flow
//! in L/s is scaled to an hourly mass flow, multiplied by the specific heat
//! of air (kcal/(kg K)) and the outside/room temperature differential, then
//! brought back to watts through the kcal/h conversion. The intermediate
//! scaling constants are kept exactly as the sheets had them so historical
//! outputs reproduce bit for bit.

use crate::constants::{keys, ConstantTable};
use crate::input::RoomInput;
use crate::FloatValue;

/// Watts per kcal/h, applied after the sensible mass-flow product.
const KCAL_H_TO_WATT: FloatValue = 1.16;

/// Sensible gain from the outside-air flow, W.
pub fn sensible_gain(input: &RoomInput, constants: &ConstantTable) -> FloatValue {
    let mass_flow =
        input.outside_air_flow * 3.6 * constants.resolve(keys::DENSIDADE_AR) * 1000.0;
    let gross = mass_flow
        * constants.resolve(keys::CALOR_ESPECIFICO_AR)
        * constants.resolve(keys::DELTA_T_AR);
    (gross / 1000.0) * KCAL_H_TO_WATT
}

/// Latent gain from the outside-air flow, W: flow times the latent factor
/// times the humidity ratio differential.
pub fn latent_gain(input: &RoomInput, constants: &ConstantTable) -> FloatValue {
    input.outside_air_flow
        * constants.resolve(keys::FATOR_LATENTE_AR)
        * constants.resolve(keys::DELTA_UA_AR)
}
