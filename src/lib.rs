//! Brewstate: the control logic of an automated beverage appliance.
//!
//! The appliance is a finite-state machine. Each state performs a timed
//! physical action (preheat, heat, pump, cleanup) or waits in Idling for the
//! operator to start a brew. While a bounded action runs the operator can
//! press the abort key to inject a failure and exercise the recovery paths.
//!
//! # Core Concepts
//!
//! - **State / Outcome**: closed enums, with a pure transition table in [`core`]
//! - **Actions**: one reusable bounded runner plus the unbounded idle wait
//! - **Input**: an [`InputSource`](input::InputSource) polled once per tick,
//!   so the controller is testable with a scripted fake
//! - **Controller**: owns the current state and steps it forever
//!
//! # Example
//!
//! ```rust
//! use brewstate::config::MachineConfig;
//! use brewstate::core::State;
//! use brewstate::input::ScriptedInput;
//! use brewstate::machine::Controller;
//! use brewstate::status::RecordingSink;
//!
//! let config = MachineConfig {
//!     tick_interval_ms: 0,
//!     idle_poll_interval_ms: 0,
//!     ..MachineConfig::default()
//! };
//! // Abort preheating on its sixth tick.
//! let input = ScriptedInput::key_after(5, 'f');
//! let mut controller = Controller::new(config, input, RecordingSink::new()).unwrap();
//!
//! assert_eq!(controller.step(), State::CleaningUp);
//! assert!(controller.status().contains("Preheat failed"));
//! ```

pub mod action;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod machine;
pub mod observability;
pub mod status;

// Re-export commonly used types
pub use crate::core::{Outcome, State};
pub use error::MachineError;
pub use machine::Controller;
