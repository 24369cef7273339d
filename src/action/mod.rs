//! Actions performed while in a state.
//!
//! Preheating, Heating, PumpEnabled and CleaningUp all share one bounded
//! runner; only Idling waits without limit.

mod idle;
mod timed;

pub use idle::run_idle_wait;
pub use timed::run_timed_action;
