//! The transition table.
//!
//! `transition` is pure: it maps a (state, outcome) pair to the next state
//! and the status report the controller must emit. Every bounded action's
//! failure leads to CleaningUp, except CleaningUp's own failure which returns
//! to Idling so a failed cycle always ends at rest.

use super::outcome::Outcome;
use super::state::State;
use std::fmt;

/// Operator-facing report attached to a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Report {
    /// A bounded action was aborted. Idling has no abort path, so an
    /// `ActionFailed(Idling)` is reported like any other unexpected outcome.
    ActionFailed(State),
    /// The controller was asked to step from a state outside the defined set.
    UnknownState,
    /// An outcome the state can never produce (e.g. Idling failing).
    UnexpectedOutcome { state: State, outcome: Outcome },
}

impl Report {
    /// Whether this report stems from a defensive branch rather than an abort.
    pub fn is_defensive(&self) -> bool {
        !matches!(self, Self::ActionFailed(state) if state.is_bounded())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionFailed(State::Preheating) => f.write_str("Preheat failed"),
            Self::ActionFailed(State::Heating) => f.write_str("Heat failed"),
            Self::ActionFailed(State::PumpEnabled) => f.write_str("Enable pump failed"),
            Self::ActionFailed(State::CleaningUp) => f.write_str("Cleanup failed"),
            Self::UnknownState => f.write_str("ERROR: Unknown state"),
            Self::ActionFailed(State::Idling) | Self::UnexpectedOutcome { .. } => {
                f.write_str("ERROR: Unexpected outcome")
            }
        }
    }
}

/// Next state chosen by the table, plus an optional report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub next: State,
    pub report: Option<Report>,
}

impl Transition {
    fn to(next: State) -> Self {
        Self { next, report: None }
    }

    fn failed(from: State, next: State) -> Self {
        Self {
            next,
            report: Some(Report::ActionFailed(from)),
        }
    }

    /// Defensive route for a step from an unknown state.
    pub fn unknown_state() -> Self {
        Self {
            next: State::Idling,
            report: Some(Report::UnknownState),
        }
    }
}

/// Look up the next state for `state` after its action resolved to `outcome`.
///
/// # Example
///
/// ```rust
/// use brewstate::core::{transition, Outcome, State};
///
/// let t = transition(State::Heating, Outcome::Failed);
/// assert_eq!(t.next, State::CleaningUp);
/// assert_eq!(t.report.unwrap().to_string(), "Heat failed");
/// ```
pub fn transition(state: State, outcome: Outcome) -> Transition {
    use Outcome::*;
    use State::*;

    match (state, outcome) {
        (Preheating, Success) => Transition::to(Idling),
        (Preheating, Failed) => Transition::failed(Preheating, CleaningUp),

        (Idling, Success) => Transition::to(Heating),
        (Idling, Pending) => Transition::to(Idling),

        (Heating, Success) => Transition::to(PumpEnabled),
        (Heating, Failed) => Transition::failed(Heating, CleaningUp),

        (PumpEnabled, Success) => Transition::to(CleaningUp),
        (PumpEnabled, Failed) => Transition::failed(PumpEnabled, CleaningUp),

        (CleaningUp, Success) => Transition::to(Idling),
        (CleaningUp, Failed) => Transition::failed(CleaningUp, Idling),

        (Idling, Failed) | (Preheating | Heating | PumpEnabled | CleaningUp, Pending) => {
            Transition {
                next: Idling,
                report: Some(Report::UnexpectedOutcome { state, outcome }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_documented_rows() {
        let rows = [
            (State::Preheating, Outcome::Success, State::Idling, None),
            (
                State::Preheating,
                Outcome::Failed,
                State::CleaningUp,
                Some("Preheat failed"),
            ),
            (State::Idling, Outcome::Success, State::Heating, None),
            (State::Idling, Outcome::Pending, State::Idling, None),
            (State::Heating, Outcome::Success, State::PumpEnabled, None),
            (
                State::Heating,
                Outcome::Failed,
                State::CleaningUp,
                Some("Heat failed"),
            ),
            (State::PumpEnabled, Outcome::Success, State::CleaningUp, None),
            (
                State::PumpEnabled,
                Outcome::Failed,
                State::CleaningUp,
                Some("Enable pump failed"),
            ),
            (State::CleaningUp, Outcome::Success, State::Idling, None),
            (
                State::CleaningUp,
                Outcome::Failed,
                State::Idling,
                Some("Cleanup failed"),
            ),
        ];

        for (state, outcome, next, report) in rows {
            let t = transition(state, outcome);
            assert_eq!(t.next, next, "{state} + {outcome:?}");
            assert_eq!(t.report.map(|r| r.to_string()).as_deref(), report);
        }
    }

    #[test]
    fn cleanup_failure_does_not_loop() {
        let t = transition(State::CleaningUp, Outcome::Failed);
        assert_ne!(t.next, State::CleaningUp);
    }

    #[test]
    fn idling_failure_is_routed_to_idling_defensively() {
        let t = transition(State::Idling, Outcome::Failed);
        assert_eq!(t.next, State::Idling);
        let report = t.report.unwrap();
        assert!(report.is_defensive());
        assert_eq!(report.to_string(), "ERROR: Unexpected outcome");
    }

    #[test]
    fn pending_from_bounded_state_rests_at_idling() {
        for state in State::ALL.into_iter().filter(State::is_bounded) {
            let t = transition(state, Outcome::Pending);
            assert_eq!(t.next, State::Idling);
            assert!(t.report.is_some_and(|r| r.is_defensive()));
        }
    }

    #[test]
    fn idling_never_reports_an_action_failure() {
        let report = Report::ActionFailed(State::Idling);
        assert!(report.is_defensive());
        assert_eq!(report.to_string(), "ERROR: Unexpected outcome");
    }

    #[test]
    fn unknown_state_rests_at_idling() {
        let t = Transition::unknown_state();
        assert_eq!(t.next, State::Idling);
        assert_eq!(t.report.unwrap().to_string(), "ERROR: Unknown state");
    }
}
