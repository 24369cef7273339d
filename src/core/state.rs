//! Appliance states.
//!
//! Exactly one state is active at a time. Only the controller changes it,
//! at the end of each step.

use crate::error::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A state of the beverage appliance.
///
/// Every state except [`State::Idling`] runs a bounded action that the
/// operator can abort. Idling waits, without limit, for the start key.
///
/// # Example
///
/// ```rust
/// use brewstate::core::State;
///
/// let state: State = "heating".parse().unwrap();
/// assert_eq!(state, State::Heating);
/// assert!(state.is_bounded());
/// assert!(!State::Idling.is_bounded());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum State {
    #[default]
    Preheating,
    Idling,
    Heating,
    PumpEnabled,
    CleaningUp,
}

impl State {
    /// All defined states, in code order.
    pub const ALL: [State; 5] = [
        State::Preheating,
        State::Idling,
        State::Heating,
        State::PumpEnabled,
        State::CleaningUp,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Preheating => "Preheating",
            Self::Idling => "Idling",
            Self::Heating => "Heating",
            Self::PumpEnabled => "PumpEnabled",
            Self::CleaningUp => "CleaningUp",
        }
    }

    /// Operator-facing description of the action this state performs.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Preheating => "Preheating",
            Self::Idling => "Idling",
            Self::Heating => "Heating up",
            Self::PumpEnabled => "Pumping water",
            Self::CleaningUp => "Cleaning up",
        }
    }

    /// Whether this state runs a fixed-duration, abortable action.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Self::Idling)
    }

    /// Stable numeric code for this state.
    pub fn code(&self) -> u8 {
        match self {
            Self::Preheating => 0,
            Self::Idling => 1,
            Self::Heating => 2,
            Self::PumpEnabled => 3,
            Self::CleaningUp => 4,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for State {
    type Error = MachineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(MachineError::UnknownState(code))
    }
}

impl FromStr for State {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(MachineError::UnknownStateName)
    }
}
