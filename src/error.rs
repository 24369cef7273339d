//! Error types for the controller.
//!
//! An operator abort is not an error: it surfaces as
//! [`Outcome::Failed`](crate::core::Outcome::Failed). The variants here cover
//! the defensive paths only.

use thiserror::Error;

/// Errors raised while interpreting machine state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    /// A raw state code outside the defined set.
    #[error("Unknown state code {0}")]
    UnknownState(u8),

    /// A state name that does not match any defined state.
    #[error("Unknown state name")]
    UnknownStateName,
}
