//! State machine controller and driver loop.

use crate::action::{run_idle_wait, run_timed_action};
use crate::config::{ConfigError, MachineConfig};
use crate::core::{transition, Outcome, Report, State, StateHistory, StateTransition, Transition};
use crate::input::InputSource;
use crate::status::StatusSink;
use chrono::Utc;

/// Owns the current state and drives it through the transition table.
///
/// The controller is the only holder of state across steps. Each step runs
/// the current state's action to an [`Outcome`], looks up the next state,
/// emits any failure report and records the transition.
///
/// # Example
///
/// ```rust
/// use brewstate::config::MachineConfig;
/// use brewstate::core::State;
/// use brewstate::input::ScriptedInput;
/// use brewstate::machine::Controller;
/// use brewstate::status::RecordingSink;
///
/// let config = MachineConfig { tick_interval_ms: 0, ..MachineConfig::default() };
/// let mut controller =
///     Controller::new(config, ScriptedInput::default(), RecordingSink::new()).unwrap();
///
/// assert_eq!(controller.step(), State::Idling);
/// assert_eq!(controller.current_state(), State::Idling);
/// ```
pub struct Controller<I: InputSource, S: StatusSink> {
    current: State,
    config: MachineConfig,
    input: I,
    status: S,
    history: StateHistory,
    completed_cycles: u64,
}

impl<I: InputSource, S: StatusSink> Controller<I, S> {
    /// Create a controller in `config.initial_state`.
    ///
    /// Fails if `config` does not pass [`MachineConfig::validate`].
    pub fn new(config: MachineConfig, input: I, status: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            current: config.initial_state,
            history: StateHistory::with_capacity(config.history_capacity),
            config,
            input,
            status,
            completed_cycles: 0,
        })
    }

    pub fn current_state(&self) -> State {
        self.current
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    /// Cycles that ended with a successful cleanup.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Run the action belonging to `state`.
    pub fn execute(&mut self, state: State) -> Outcome {
        let keys = self.config.keys();
        match state {
            State::Idling => run_idle_wait(
                &keys,
                self.config.idle_poll_interval(),
                &mut self.input,
                &mut self.status,
            ),
            bounded => run_timed_action(
                bounded.prompt(),
                &self.config.timing(),
                &keys,
                &mut self.input,
                &mut self.status,
            ),
        }
    }

    /// Execute the current state's action and move to the next state.
    pub fn step(&mut self) -> State {
        let from = self.current;
        let outcome = self.execute(from);
        let next = transition(from, outcome);

        self.apply(from, outcome, next)
    }

    /// Step from a raw state code.
    ///
    /// A code outside the defined set runs no action: it reports
    /// "ERROR: Unknown state" and forces the machine to Idling.
    pub fn step_code(&mut self, code: u8) -> State {
        match State::try_from(code) {
            Ok(state) => {
                self.current = state;
                self.step()
            }
            Err(err) => {
                tracing::error!(error = %err, "stepping from unknown state");
                self.report(Transition::unknown_state().report);
                self.current = State::Idling;
                self.current
            }
        }
    }

    /// Step forever. The process only ends when it is terminated externally.
    pub fn run(&mut self) -> ! {
        tracing::info!(initial = %self.current, "controller started");
        loop {
            self.step();
        }
    }

    fn apply(&mut self, from: State, outcome: Outcome, chosen: Transition) -> State {
        self.report(chosen.report);

        if from == State::CleaningUp && outcome == Outcome::Success {
            self.completed_cycles += 1;
        }

        self.history.record(StateTransition {
            from,
            to: chosen.next,
            outcome,
            timestamp: Utc::now(),
        });
        tracing::debug!(%from, to = %chosen.next, ?outcome, "transition");

        self.current = chosen.next;
        self.current
    }

    fn report(&mut self, report: Option<Report>) {
        let Some(report) = report else {
            return;
        };

        if report.is_defensive() {
            tracing::error!(%report, "defensive transition to Idling");
        } else {
            tracing::warn!(%report, "action failed");
            // Failure lines are set apart from the action prompt.
            self.status.emit("");
        }
        self.status.emit(&report.to_string());
    }
}
