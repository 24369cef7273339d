//! State transition history tracking.
//!
//! The controller runs forever, so the history is a bounded window over the
//! most recent transitions rather than a complete log.

use super::outcome::Outcome;
use super::state::State;
use crate::config::DEFAULT_HISTORY_CAPACITY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use brewstate::core::{Outcome, State, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: State::Heating,
///     to: State::CleaningUp,
///     outcome: Outcome::Failed,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: State,
    /// The state being transitioned to
    pub to: State,
    /// Outcome of the action that ran in `from`
    pub outcome: Outcome,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }
}

/// Ordered, bounded history of state transitions.
///
/// Once `capacity` transitions are held, recording a new one evicts the
/// oldest. A capacity of zero keeps nothing.
///
/// # Example
///
/// ```rust
/// use brewstate::core::{Outcome, State, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(StateTransition {
///     from: State::Preheating,
///     to: State::Idling,
///     outcome: Outcome::Success,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: State::Idling,
///     to: State::Heating,
///     outcome: Outcome::Success,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![State::Preheating, State::Idling, State::Heating]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    capacity: usize,
    transitions: VecDeque<StateTransition>,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl StateHistory {
    /// Create an empty history holding at most `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a transition, evicting the oldest ones until it fits.
    ///
    /// A deserialized history may hold more than `capacity` entries; the
    /// excess is dropped on the next record.
    pub fn record(&mut self, transition: StateTransition) {
        if self.capacity == 0 {
            self.transitions.clear();
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed within the window.
    ///
    /// The first element is the `from` state of the oldest retained
    /// transition, followed by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<State> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time elapsed between the oldest and newest retained transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of retained transitions whose action failed.
    pub fn failures(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_failure()).count()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
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

    fn step(from: State, to: State, outcome: Outcome) -> StateTransition {
        StateTransition {
            from,
            to,
            outcome,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::with_capacity(4);
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::with_capacity(4);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, State::Idling);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::with_capacity(4);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));
        history.record(step(State::Idling, State::Heating, Outcome::Success));

        assert_eq!(
            history.get_path(),
            vec![State::Preheating, State::Idling, State::Heating]
        );
    }

    #[test]
    fn oldest_transitions_are_evicted() {
        let mut history = StateHistory::with_capacity(2);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));
        history.record(step(State::Idling, State::Heating, Outcome::Success));
        history.record(step(State::Heating, State::CleaningUp, Outcome::Failed));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![State::Idling, State::Heating, State::CleaningUp]
        );
    }

    #[test]
    fn shrunken_capacity_is_enforced_after_deserializing() {
        let mut history = StateHistory::with_capacity(4);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));
        history.record(step(State::Idling, State::Heating, Outcome::Success));
        history.record(step(State::Heating, State::PumpEnabled, Outcome::Success));

        let mut json = serde_json::to_value(&history).unwrap();
        json["capacity"] = serde_json::json!(1);
        let mut restored: StateHistory = serde_json::from_value(json).unwrap();

        for _ in 0..10 {
            restored.record(step(State::CleaningUp, State::Idling, Outcome::Success));
            assert!(restored.len() <= restored.capacity());
        }
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn default_capacity_matches_config_default() {
        assert_eq!(StateHistory::default().capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = StateHistory::with_capacity(0);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));
        assert!(history.is_empty());
    }

    #[test]
    fn failures_counts_failed_outcomes() {
        let mut history = StateHistory::with_capacity(8);
        history.record(step(State::Preheating, State::CleaningUp, Outcome::Failed));
        history.record(step(State::CleaningUp, State::Idling, Outcome::Failed));
        history.record(step(State::Idling, State::Heating, Outcome::Success));

        assert_eq!(history.failures(), 2);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::with_capacity(4);
        history.record(step(State::Preheating, State::Idling, Outcome::Success));

        std::thread::sleep(Duration::from_millis(10));

        history.record(step(State::Idling, State::Heating, Outcome::Success));

        assert!(history.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_capacity(4);
        history.record(step(State::Heating, State::PumpEnabled, Outcome::Success));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), 4);
        assert_eq!(deserialized.last(), history.last());
    }
}
