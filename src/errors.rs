use thiserror::Error;

/// Error type for aborted calculation runs.
///
/// Each variant aborts a single invocation only; no state is shared between
/// rooms, so a failed run never affects another one. Malformed numeric input
/// is not represented here: it is absorbed at the input boundary and coerced
/// to zero.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("constants were not ready after {waited_ms} ms")]
    ConstantsTimeout { waited_ms: u128 },
    #[error("constants table is missing {} required key(s): {}", missing.len(), missing.join(", "))]
    MissingConstants { missing: Vec<String> },
    #[error("no room input found for id {room}")]
    RoomNotFound { room: String },
    #[error("failed to parse constants file: {0}")]
    InvalidConstants(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;
