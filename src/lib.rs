//! Rewind: declarative finite-state machines with undo/redo history
//!
//! A machine is described by a [`Config`]: an initial state plus, for every
//! state, a table mapping event names to destination states. An [`Fsm`]
//! tracks the current state, applies explicit changes and events, and keeps
//! a linear undo/redo history of every forward change.
//!
//! # Core Concepts
//!
//! - **Config**: Plain data, loadable from JSON or declared with [`fsm_config!`]
//! - **Fsm**: Synchronous engine owning the current state and its history
//! - **History**: Undo/redo stacks; any forward change discards redo
//! - **Journal**: Timestamped log of every applied change
//!
//! # Example
//!
//! ```rust
//! use rewind::{Config, Fsm, FsmError};
//!
//! let config = Config::from_json(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "turnOn": "on" } },
//!         "on":  { "transitions": { "turnOff": "off" } }
//!     }
//! }"#).unwrap();
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("turnOn").unwrap();
//! fsm.trigger("turnOff").unwrap();
//!
//! assert!(matches!(fsm.trigger("turnOff"), Err(FsmError::InvalidEvent { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "on");
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//! assert!(!fsm.undo());
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "on");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder};
pub use crate::core::{
    Config, ConfigError, ConfigIssue, History, Journal, StateDef, TransitionCause,
};
pub use crate::machine::{Fsm, FsmError};
