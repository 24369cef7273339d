//! Controller configuration.
//!
//! Every field has a default matching the stock appliance: twenty ticks of
//! 100ms per bounded action, `F` to abort and `C` to start a brew. A JSON
//! document may override any subset of fields.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

/// Nominal number of ticks in a bounded action.
pub const DEFAULT_ACTION_TICKS: u32 = 20;

/// Nominal wait per tick, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Wait between empty polls while idling, in milliseconds.
pub const DEFAULT_IDLE_POLL_INTERVAL_MS: u64 = 10;

/// Number of transitions retained in the controller's history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Tunable parameters of the controller.
///
/// # Example
///
/// ```rust
/// use brewstate::config::MachineConfig;
/// use brewstate::core::State;
///
/// let config = MachineConfig::from_json_str(r#"{ "action_ticks": 5, "initial_state": "Idling" }"#).unwrap();
/// assert_eq!(config.action_ticks, 5);
/// assert_eq!(config.initial_state, State::Idling);
/// assert_eq!(config.tick_interval_ms, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Ticks per bounded action
    pub action_ticks: u32,

    /// Wait before each poll of a bounded action
    pub tick_interval_ms: u64,

    /// Wait between empty polls while idling
    pub idle_poll_interval_ms: u64,

    /// Key that aborts a bounded action (case-insensitive)
    pub abort_key: char,

    /// Key that starts a brew from Idling (case-insensitive)
    pub start_key: char,

    /// State the controller starts in
    pub initial_state: State,

    /// Transitions kept in history
    pub history_capacity: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            action_ticks: DEFAULT_ACTION_TICKS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            idle_poll_interval_ms: DEFAULT_IDLE_POLL_INTERVAL_MS,
            abort_key: 'f',
            start_key: 'c',
            initial_state: State::Preheating,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.action_ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        for key in [self.abort_key, self.start_key] {
            if !key.is_ascii_alphanumeric() {
                return Err(ConfigError::InvalidKey(key));
            }
        }
        if self.abort_key.eq_ignore_ascii_case(&self.start_key) {
            return Err(ConfigError::KeyCollision(self.abort_key));
        }
        Ok(())
    }

    pub fn timing(&self) -> ActionTiming {
        ActionTiming {
            ticks: self.action_ticks,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }

    pub fn keys(&self) -> KeyBindings {
        KeyBindings {
            abort: self.abort_key,
            start: self.start_key,
        }
    }

    pub fn idle_poll_interval(&self) -> Duration {
        Duration::from_millis(self.idle_poll_interval_ms)
    }
}

/// Duration of a bounded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionTiming {
    pub ticks: u32,
    pub tick_interval: Duration,
}

impl ActionTiming {
    /// Timing with no wait between ticks.
    pub fn instant(ticks: u32) -> Self {
        Self {
            ticks,
            tick_interval: Duration::ZERO,
        }
    }
}

impl Default for ActionTiming {
    fn default() -> Self {
        MachineConfig::default().timing()
    }
}

/// Operator key bindings, matched case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub abort: char,
    pub start: char,
}

impl KeyBindings {
    pub fn is_abort(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.abort)
    }

    pub fn is_start(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.start)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        MachineConfig::default().keys()
    }
}
