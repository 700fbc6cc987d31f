//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for declaring machine
//! configurations in Rust source instead of loading them from JSON.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;
