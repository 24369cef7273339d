//! Result of running a state's action.

use serde::{Deserialize, Serialize};

/// Outcome of executing the action of the current state.
///
/// Produced fresh by each action invocation and consumed immediately by the
/// controller. `Pending` belongs to Idling alone, and the idle action blocks
/// until it can return `Success` instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Pending,
    Failed,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Success, Outcome::Pending, Outcome::Failed];

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
