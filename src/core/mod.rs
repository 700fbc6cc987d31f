//! Core data types for the state machine.
//!
//! This module contains the plain-data pieces the engine is built from:
//! - Declarative configuration (`Config`, `StateDef`)
//! - Undo/redo history stacks
//! - An append-only journal of applied changes
//! - Opt-in configuration validation

mod config;
mod history;
mod journal;
mod validate;

pub use config::{Config, ConfigError, EventId, StateDef, StateId};
pub use history::History;
pub use journal::{Journal, StateTransition, TransitionCause};
pub use validate::ConfigIssue;
