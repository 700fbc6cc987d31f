//! Opt-in well-formedness checks for configurations.
//!
//! The engine trusts its configuration: it never checks that the initial
//! state or the transition targets exist. [`Config::validate`] reports every
//! such problem in one pass using Stillwater's `Validation`, so callers can
//! reject a bad configuration before building a machine from it.

use super::config::{Config, EventId, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Configuration defines no states")]
    NoStates,

    #[error("Initial state '{initial}' is not defined")]
    UnknownInitial { initial: StateId },

    #[error("Event '{event}' on state '{state}' targets undefined state '{target}'")]
    DanglingTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

impl Config {
    /// Check the configuration, accumulating ALL issues.
    ///
    /// Returns `Validation::Success(())` for a well-formed configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::Config;
    ///
    /// let config = Config::from_json(r#"{
    ///     "initial": "start",
    ///     "states": { "idle": { "transitions": { "go": "nowhere" } } }
    /// }"#).unwrap();
    ///
    /// let result = config.validate();
    /// assert!(result.is_failure());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(ConfigIssue::NoStates));
        }

        let initial = if self.contains(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigIssue::UnknownInitial {
                initial: self.initial.clone(),
            })
        };
        checks.push(initial);

        for (state, def) in &self.states {
            for (event, target) in &def.transitions {
                if !self.contains(target) {
                    checks.push(Validation::fail(ConfigIssue::DanglingTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Whether [`Config::validate`] finds no issues.
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;
    use std::collections::BTreeMap;

    #[test]
    fn well_formed_config_passes() {
        let mut states = BTreeMap::new();
        states.insert("off".to_string(), StateDef::new().on("turnOn", "on"));
        states.insert("on".to_string(), StateDef::new().on("turnOff", "off"));
        let config = Config::new("off", states);

        assert!(config.validate().is_success());
        assert!(config.is_well_formed());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let mut states = BTreeMap::new();
        states.insert("a".to_string(), StateDef::new().on("x", "ghost").on("y", "b"));
        states.insert("b".to_string(), StateDef::new().on("z", "phantom"));
        let config = Config::new("missing", states);

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 3);

                assert!(issues.iter().any(|i| matches!(
                    i,
                    ConfigIssue::UnknownInitial { initial } if initial == "missing"
                )));
                assert!(issues.iter().any(|i| matches!(
                    i,
                    ConfigIssue::DanglingTarget { target, .. } if target == "ghost"
                )));
                assert!(issues.iter().any(|i| matches!(
                    i,
                    ConfigIssue::DanglingTarget { target, .. } if target == "phantom"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_config_reports_no_states_and_unknown_initial() {
        let config = Config::new("anything", BTreeMap::new());

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 2);
                assert!(issues.iter().any(|i| *i == ConfigIssue::NoStates));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn issue_messages_name_the_offender() {
        let issue = ConfigIssue::DanglingTarget {
            state: "a".to_string(),
            event: "x".to_string(),
            target: "ghost".to_string(),
        };

        assert_eq!(
            issue.to_string(),
            "Event 'x' on state 'a' targets undefined state 'ghost'"
        );
    }
}
