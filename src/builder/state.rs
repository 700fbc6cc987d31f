//! Builder for a single state's transition table.

use crate::core::{EventId, StateDef, StateId};

/// Fluent builder for one state's outgoing transitions.
///
/// Defining the same event twice keeps the last target.
#[derive(Debug, Default)]
pub struct StateBuilder {
    transitions: Vec<(EventId, StateId)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave for `target` when `event` fires.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state definition.
    pub fn build(self) -> StateDef {
        self.transitions
            .into_iter()
            .fold(StateDef::new(), |def, (event, target)| def.on(event, target))
    }
}
