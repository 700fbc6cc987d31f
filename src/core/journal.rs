//! Timestamped journal of applied state changes.
//!
//! Unlike [`History`](super::History), the journal only grows: it records
//! undos and redos as changes of their own and survives `clear_history`.
//! Long-lived owners call `clear_journal` to release it.

use super::config::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// Explicit `change_state` call
    Change,
    /// Event fired through `trigger`
    Event(EventId),
    /// Return to the initial state
    Reset,
    /// Step back through history
    Undo,
    /// Step forward through history
    Redo,
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change => write!(f, "change"),
            Self::Event(event) => write!(f, "event '{event}'"),
            Self::Reset => write!(f, "reset"),
            Self::Undo => write!(f, "undo"),
            Self::Redo => write!(f, "redo"),
        }
    }
}

/// Record of a single applied change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Operation that produced the change
    pub cause: TransitionCause,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Record a change happening now.
    pub fn now(from: StateId, to: StateId, cause: TransitionCause) -> Self {
        Self {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of applied changes.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Journal, StateTransition, TransitionCause};
///
/// let mut journal = Journal::new();
/// journal.record(StateTransition::now(
///     "off".to_string(),
///     "on".to_string(),
///     TransitionCause::Event("turnOn".to_string()),
/// ));
/// journal.record(StateTransition::now(
///     "on".to_string(),
///     "off".to_string(),
///     TransitionCause::Undo,
/// ));
///
/// assert_eq!(journal.get_path(), vec!["off", "on", "off"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    transitions: Vec<StateTransition>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Drop every recorded change.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first recorded source state followed by every
    /// destination in order. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded change.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent change.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    /// All changes, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(from: &str, to: &str, cause: TransitionCause) -> StateTransition {
        StateTransition::now(from.to_string(), to.to_string(), cause)
    }

    #[test]
    fn new_journal_is_empty() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert!(journal.get_path().is_empty());
        assert!(journal.duration().is_none());
        assert!(journal.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut journal = Journal::new();
        journal.record(change("idle", "running", TransitionCause::Change));
        journal.record(change("running", "done", TransitionCause::Event("finish".into())));

        assert_eq!(journal.get_path(), vec!["idle", "running", "done"]);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut journal = Journal::new();
        journal.record(change("a", "b", TransitionCause::Change));

        std::thread::sleep(Duration::from_millis(10));

        journal.record(change("b", "a", TransitionCause::Undo));

        let duration = journal.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut journal = Journal::new();
        journal.record(change("a", "b", TransitionCause::Reset));

        assert_eq!(journal.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn clear_empties_journal() {
        let mut journal = Journal::new();
        journal.record(change("a", "b", TransitionCause::Change));
        journal.record(change("b", "a", TransitionCause::Undo));

        journal.clear();

        assert!(journal.is_empty());
        assert!(journal.get_path().is_empty());
        assert!(journal.duration().is_none());
    }

    #[test]
    fn cause_display_is_readable() {
        assert_eq!(TransitionCause::Change.to_string(), "change");
        assert_eq!(
            TransitionCause::Event("turnOn".into()).to_string(),
            "event 'turnOn'"
        );
        assert_eq!(TransitionCause::Redo.to_string(), "redo");
    }

    #[test]
    fn journal_serializes_correctly() {
        let mut journal = Journal::new();
        journal.record(change("off", "on", TransitionCause::Event("turnOn".into())));

        let json = serde_json::to_string(&journal).unwrap();
        let deserialized: Journal = serde_json::from_str(&json).unwrap();

        assert_eq!(journal, deserialized);
    }
}
