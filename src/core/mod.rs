//! Core state machine types and logic.
//!
//! This module contains the pure part of the controller:
//! - The appliance `State` and action `Outcome` types
//! - The transition table
//! - Bounded history tracking
//!
//! Nothing here performs I/O; actions and the controller live elsewhere.

mod history;
mod outcome;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use outcome::Outcome;
pub use state::State;
pub use transition::{transition, Report, Transition};
