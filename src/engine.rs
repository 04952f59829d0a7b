//! The orchestrator and its collaborator seams.
//!
//! A calculation run walks a fixed sequence of phases:
//!
//! ```text
//! AwaitingConstants -> Validating -> ResolvingInput -> Computing -> Aggregating -> Done
//! ```
//!
//! Any phase may abort the run with one of the [`EngineError`] reasons; an
//! aborted run returns the error to the caller and touches nothing else, so
//! the room's previous display stays consistent. The engine holds no
//! cross-invocation state: runs for different rooms are independent and may
//! execute concurrently, and identical inputs always produce identical
//! results.

use crate::aggregate::ThermalResult;
use crate::constants::loader::{ConstantsHandle, GateConfig};
use crate::errors::{EngineError, EngineResult};
use crate::gains::GainBreakdown;
use crate::input::RoomInput;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Supplies the input snapshot for a room, or `None` when the room is
/// unknown to the data layer.
pub trait RoomSource: Send + Sync {
    fn room_input(&self, room_id: &str) -> Option<RoomInput>;
}

/// Receives the result of a successful run for display. Never called for an
/// aborted run.
pub trait PresentationSink: Send + Sync {
    fn present(&self, room_id: &str, result: &ThermalResult);
}

/// Downstream equipment-capacity selection. Attached best-effort: the engine
/// works without one and only notes its absence.
pub trait CapacitySelector: Send + Sync {
    fn select_capacity(&self, room_id: &str, result: &ThermalResult);
}

/// Phase of a calculation run, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingConstants,
    Validating,
    ResolvingInput,
    Computing,
    Aggregating,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::AwaitingConstants => "awaiting constants",
            Phase::Validating => "validating constants",
            Phase::ResolvingInput => "resolving room input",
            Phase::Computing => "computing gains",
            Phase::Aggregating => "aggregating",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Assembles a [`ThermalEngine`].
///
/// The constants handle, room source and presentation sink are mandatory;
/// the capacity selector is the only optional attachment.
pub struct EngineBuilder {
    constants: ConstantsHandle,
    gate: GateConfig,
    rooms: Arc<dyn RoomSource>,
    presentation: Arc<dyn PresentationSink>,
    capacity: Option<Arc<dyn CapacitySelector>>,
}

impl EngineBuilder {
    pub fn new(
        constants: ConstantsHandle,
        rooms: Arc<dyn RoomSource>,
        presentation: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            constants,
            gate: GateConfig::default(),
            rooms,
            presentation,
            capacity: None,
        }
    }

    /// Override the readiness gate bound.
    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    /// Attach the downstream capacity selector.
    pub fn with_capacity_selector(mut self, selector: Arc<dyn CapacitySelector>) -> Self {
        self.capacity = Some(selector);
        self
    }

    pub fn build(self) -> ThermalEngine {
        ThermalEngine {
            constants: self.constants,
            gate: self.gate,
            rooms: self.rooms,
            presentation: self.presentation,
            capacity: self.capacity,
        }
    }
}

/// Orchestrates one thermal load calculation per call to [`ThermalEngine::run`].
pub struct ThermalEngine {
    constants: ConstantsHandle,
    gate: GateConfig,
    rooms: Arc<dyn RoomSource>,
    presentation: Arc<dyn PresentationSink>,
    capacity: Option<Arc<dyn CapacitySelector>>,
}

impl ThermalEngine {
    pub fn builder(
        constants: ConstantsHandle,
        rooms: Arc<dyn RoomSource>,
        presentation: Arc<dyn PresentationSink>,
    ) -> EngineBuilder {
        EngineBuilder::new(constants, rooms, presentation)
    }

    /// Run the full pipeline for one room.
    ///
    /// On success the result has been handed to the presentation sink and,
    /// when attached, to the capacity selector. On abort the error names the
    /// reason and nothing has been published.
    pub fn run(&self, room_id: &str) -> EngineResult<ThermalResult> {
        self.enter(room_id, Phase::AwaitingConstants);
        let table = self.constants.wait_ready(&self.gate)?;

        self.enter(room_id, Phase::Validating);
        table
            .validate()
            .map_err(|missing| EngineError::MissingConstants { missing })?;

        self.enter(room_id, Phase::ResolvingInput);
        let input = self
            .rooms
            .room_input(room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room: room_id.to_owned(),
            })?;

        self.enter(room_id, Phase::Computing);
        let breakdown = GainBreakdown::compute(&input, &table);

        self.enter(room_id, Phase::Aggregating);
        let result = ThermalResult::from_breakdown(&breakdown);

        self.enter(room_id, Phase::Done);
        self.presentation.present(room_id, &result);
        match &self.capacity {
            Some(selector) => selector.select_capacity(room_id, &result),
            None => debug!("room {room_id}: no capacity selector attached, skipping hand-off"),
        }

        Ok(result)
    }

    fn enter(&self, room_id: &str, phase: Phase) {
        debug!("room {room_id}: {phase}");
    }
}
