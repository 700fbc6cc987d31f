//! Errors raised by the state machine engine.

use crate::core::{ConfigError, EventId, StateId};
use thiserror::Error;

/// Errors that can occur when creating or driving a machine.
///
/// A failed call never changes the machine: current state, history and
/// journal are left exactly as they were.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("No configuration supplied")]
    MissingConfiguration,

    #[error("State '{state}' is not defined")]
    InvalidState { state: StateId },

    #[error("Event '{event}' is not defined for state '{state}'")]
    InvalidEvent { event: EventId, state: StateId },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
