//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Config, StateDef, StateId};
use std::collections::BTreeMap;

/// Builder for constructing configurations with a fluent API.
///
/// Transition targets are not checked; call
/// [`Config::validate`](crate::core::Config::validate) on the result for that.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: BTreeMap<StateId, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Define a state using a [`StateBuilder`].
    ///
    /// Defining a state again replaces its previous definition.
    pub fn state<F>(self, name: impl Into<StateId>, define: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        self.add_state(name, define(StateBuilder::new()).build())
    }

    /// Add a pre-built state definition.
    pub fn add_state(mut self, name: impl Into<StateId>, def: StateDef) -> Self {
        self.states.insert(name.into(), def);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Config::new(initial, self.states))
    }
}
