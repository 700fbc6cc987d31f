//! Undo/redo history of visited states.

use super::config::StateId;
use serde::{Deserialize, Serialize};

/// Linear undo/redo history.
///
/// Both stacks hold state identifiers, oldest first, and are pushed and
/// popped at the tail. Recording a forward change empties the redo stack:
/// redo is only available right after one or more consecutive undos.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new();
/// history.record("off".to_string());
///
/// // Step back from "on" to "off", then forward again.
/// assert_eq!(history.step_back("on".to_string()), Some("off".to_string()));
/// assert_eq!(history.step_forward("off".to_string()), Some("on".to_string()));
/// assert_eq!(history.step_forward("on".to_string()), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state left by a forward change.
    ///
    /// Pushes `previous` onto the undo stack and discards the redo stack.
    pub fn record(&mut self, previous: StateId) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to restore, moving `current` onto the redo stack,
    /// or `None` without touching anything if there is nothing to undo.
    pub fn step_back(&mut self, current: StateId) -> Option<StateId> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward from `current`.
    ///
    /// Returns the state to restore, moving `current` onto the undo stack,
    /// or `None` without touching anything if there is nothing to redo.
    pub fn step_forward(&mut self, current: StateId) -> Option<StateId> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo stack, oldest entry first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// Redo stack, oldest entry first.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StateId {
        s.to_string()
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_undo_and_clears_redo() {
        let mut history = History::new();
        history.record(id("a"));
        history.record(id("b"));
        assert_eq!(history.step_back(id("c")), Some(id("b")));
        assert_eq!(history.redo_len(), 1);

        history.record(id("b"));

        assert_eq!(history.undo_stack(), &[id("a"), id("b")]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn step_back_on_empty_leaves_stacks_alone() {
        let mut history = History::new();
        assert_eq!(history.step_back(id("a")), None);
        assert!(history.is_empty());
    }

    #[test]
    fn step_forward_on_empty_leaves_stacks_alone() {
        let mut history = History::new();
        history.record(id("a"));

        assert_eq!(history.step_forward(id("b")), None);
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn back_and_forth_toggles() {
        let mut history = History::new();
        history.record(id("a"));

        let restored = history.step_back(id("b")).unwrap();
        assert_eq!(restored, "a");
        let restored = history.step_forward(restored).unwrap();
        assert_eq!(restored, "b");

        assert_eq!(history.undo_stack(), &[id("a")]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.record(id("a"));
        history.record(id("b"));
        history.step_back(id("c"));

        history.clear();

        assert!(history.is_empty());
    }
}
