//! Thermal load engine for climatized rooms.
//!
//! This crate computes the heat gain of a room from its physical description
//! (geometry, construction material, occupancy, lighting, panel dissipation,
//! outside-air flow) and hands the aggregated result to a downstream
//! equipment-capacity selector.
//!
//! # Module Organisation
//!
//! - `constants`: the engineering constant table, its required keys,
//!   centralized fallback defaults and the load-once readiness gate
//! - `input`: the per-room input snapshot and its lenient deserialization
//! - `coefficients`: construction-type dependent thermal transmittance
//! - `gains`: the per-category heat gain calculators
//! - `aggregate`: grouping and the ceiling-rounding policy
//! - `engine`: the orchestrator and its collaborator seams
//!
//! # Rounding Policy
//!
//! Every reported group total and grand total is rounded up (ceiling).
//! Capacity sizing must never under-report a load, so neither truncation nor
//! round-to-nearest is ever applied to a surfaced value. The unrounded
//! per-category breakdown is preserved alongside the rounded totals for
//! audit and display.

pub mod aggregate;
pub mod coefficients;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod gains;
pub mod input;

pub use aggregate::{ThermalResult, WATTS_PER_TON};
pub use coefficients::CoefficientSet;
pub use constants::loader::{ConstantsHandle, ConstantsLoader, GateConfig};
pub use constants::ConstantTable;
pub use engine::{CapacitySelector, EngineBuilder, PresentationSink, RoomSource, ThermalEngine};
pub use errors::{EngineError, EngineResult};
pub use gains::GainBreakdown;
pub use input::{ConstructionType, Orientation, PartitionClass, RoomInput};

/// Floating point value type used for all physical quantities.
pub type FloatValue = f64;
