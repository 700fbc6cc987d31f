//! Declarative machine configuration.
//!
//! A [`Config`] names the initial state and, for every state, the table of
//! events that leave it. Configurations are plain data: they can be written
//! as Rust literals, assembled with [`ConfigBuilder`](crate::builder::ConfigBuilder),
//! or deserialized from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Identifier of a state.
pub type StateId = String;

/// Identifier of an event.
pub type EventId = String;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Transition table of a single state.
///
/// Maps event identifiers to destination state identifiers. An empty table
/// is valid: the state can still be entered with an explicit state change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateDef;
    ///
    /// let off = StateDef::new().on("turnOn", "on");
    /// assert_eq!(off.target("turnOn"), Some("on"));
    /// assert_eq!(off.target("turnOff"), None);
    /// ```
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Destination reached by `event`, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether `event` is defined on this state.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events defined on this state.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Immutable machine configuration.
///
/// The engine never checks that `initial` or the transition targets are
/// keys of `states`. Use [`Config::validate`] to lint a configuration
/// before handing it over.
///
/// # Example
///
/// ```rust
/// use rewind::core::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "turnOn": "on" } },
///         "on":  { "transitions": { "turnOff": "off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert!(config.contains("on"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub initial: StateId,
    pub states: BTreeMap<StateId, StateDef>,
}

impl Config {
    /// Create a configuration from its parts.
    pub fn new(initial: impl Into<StateId>, states: BTreeMap<StateId, StateDef>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `state` is a key of the state table.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if configured.
    pub fn state(&self, state: &str) -> Option<&StateDef> {
        self.states.get(state)
    }

    /// Destination of `event` when fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|def| def.target(event))
    }

    /// All state identifiers, in map order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// States whose transition table defines `event`.
    pub fn states_handling<'a>(&'a self, event: &str) -> Vec<&'a str> {
        self.states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
