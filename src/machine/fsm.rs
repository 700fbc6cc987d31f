//! Finite-state machine driven by explicit changes and named events.

use crate::core::{
    Config, ConfigError, History, Journal, StateId, StateTransition, TransitionCause,
};
use crate::machine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// State machine instance with undo/redo history.
///
/// The configuration is shared through an [`Arc`] and never mutated, so one
/// configuration can back any number of machines. Each machine owns its
/// current state, its history stacks and its journal.
///
/// # Example
///
/// ```rust
/// use rewind::machine::Fsm;
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: off,
///     states: {
///         off: { turnOn => on },
///         on: { turnOff => off },
///     }
/// };
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("turnOn").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
/// ```
#[derive(Debug)]
pub struct Fsm {
    id: Uuid,
    config: Arc<Config>,
    state: StateId,
    history: History,
    journal: Journal,
}

impl Fsm {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is not checked against the state table.
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        let config = config.into();
        let id = Uuid::new_v4();
        debug!("Created machine {} in state '{}'", id, config.initial);
        Self {
            id,
            state: config.initial.clone(),
            config,
            history: History::new(),
            journal: Journal::new(),
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`FsmError::MissingConfiguration`] when `config` is `None`.
    pub fn create(config: Option<Arc<Config>>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::MissingConfiguration)
    }

    /// Create a machine from a JSON configuration.
    ///
    /// A JSON `null` document is treated as a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<Config> = serde_json::from_str(json).map_err(ConfigError::from)?;
        Self::create(config.map(Arc::new))
    }

    /// Current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Identifier this machine logs under.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Shared configuration backing this machine.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Undo/redo stacks.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Log of every applied change, including undos and redos.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Go to `target` directly.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not a configured
    /// state, leaving the machine untouched.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains(target) {
            warn!(
                "Machine {} rejected change to unknown state '{}'",
                self.id, target
            );
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        self.advance(target.to_string(), TransitionCause::Change);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails with [`FsmError::InvalidEvent`] if the current state defines no
    /// transition for `event`, leaving the machine untouched. The resolved
    /// destination is trusted as configured.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self
            .config
            .target(&self.state, event)
            .map(str::to_owned)
        else {
            warn!(
                "Machine {} rejected event '{}' in state '{}'",
                self.id, event, self.state
            );
            return Err(FsmError::InvalidEvent {
                event: event.to_string(),
                state: self.state.clone(),
            });
        };

        if !self.config.contains(&target) {
            warn!(
                "Event '{}' on state '{}' leads to undefined state '{}'",
                event, self.state, target
            );
        }

        self.advance(target, TransitionCause::Event(event.to_string()));
        Ok(())
    }

    /// Whether `trigger(event)` would succeed from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(&self.state, event).is_some()
    }

    /// Events defined on the current state.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(&self.state)
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    /// Return to the initial state. Always succeeds.
    pub fn reset(&mut self) {
        let initial = self.config.initial.clone();
        self.advance(initial, TransitionCause::Reset);
    }

    /// States from which `event` can be fired.
    ///
    /// With no event (or an empty one), returns every configured state.
    /// The order follows the configuration map and carries no meaning.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            Some(event) => self.config.states_handling(event),
            None => self.config.state_ids().collect(),
        }
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(self.state.clone()) else {
            debug!("Machine {} has nothing to undo", self.id);
            return false;
        };

        let left = std::mem::replace(&mut self.state, previous);
        self.log(left, TransitionCause::Undo);
        true
    }

    /// Step forward to the state left by the last undo.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward(self.state.clone()) else {
            debug!("Machine {} has nothing to redo", self.id);
            return false;
        };

        let left = std::mem::replace(&mut self.state, next);
        self.log(left, TransitionCause::Redo);
        true
    }

    /// Whether `undo` would move the machine.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would move the machine.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget undo/redo history. The current state and journal are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!("Machine {} cleared its history", self.id);
    }

    /// Drop every journal entry. The current state and history are kept.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        debug!("Machine {} cleared its journal", self.id);
    }

    fn advance(&mut self, target: StateId, cause: TransitionCause) {
        let previous = std::mem::replace(&mut self.state, target);
        self.log(previous.clone(), cause);
        self.history.record(previous);
    }

    fn log(&mut self, from: StateId, cause: TransitionCause) {
        debug!(
            "Machine {} moved '{}' -> '{}' on {}",
            self.id, from, self.state, cause
        );
        self.journal
            .record(StateTransition::now(from, self.state.clone(), cause));
    }
}

impl Clone for Fsm {
    /// Copies state, history and journal under a fresh instance id.
    fn clone(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            config: Arc::clone(&self.config),
            state: self.state.clone(),
            history: self.history.clone(),
            journal: self.journal.clone(),
        }
    }
}
