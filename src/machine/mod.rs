//! The state machine engine.
//!
//! [`Fsm`] tracks the current state of a machine described by a
//! [`Config`](crate::core::Config) and keeps a linear undo/redo history of
//! every forward change.
//!
//! # Key Concepts
//!
//! - **Explicit changes**: `change_state` jumps to any configured state
//! - **Events**: `trigger` follows the current state's transition table
//! - **History**: `undo`/`redo` walk back and forth until the next forward change
//!
//! Structural misuse (unknown state, undefined event, missing configuration)
//! is an error. Exhausted history is not: `undo` and `redo` return `false`.

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
