//! Operator input.
//!
//! The controller and actions only see [`InputSource`]: a non-blocking poll
//! that yields at most one pending character. How keypresses are read from
//! the host is up to the implementation.

mod terminal;

pub use terminal::TerminalInput;

use std::collections::VecDeque;

/// Source of operator keypresses.
pub trait InputSource {
    /// Return the next buffered character, if any, without blocking.
    fn poll_char(&mut self) -> Option<char>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_char(&mut self) -> Option<char> {
        (**self).poll_char()
    }
}

/// Deterministic input replaying a fixed sequence of poll results.
///
/// Each poll consumes one scripted entry. Once the script is exhausted every
/// poll returns `None`.
///
/// # Example
///
/// ```rust
/// use brewstate::input::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new([None, Some('x'), Some('c')]);
/// assert_eq!(input.poll_char(), None);
/// assert_eq!(input.poll_char(), Some('x'));
/// assert_eq!(input.poll_char(), Some('c'));
/// assert_eq!(input.poll_char(), None);
/// assert_eq!(input.polls(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<char>>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<char>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Script where every poll yields the next character of `keys`.
    pub fn keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Some))
    }

    /// Script with `quiet` empty polls followed by `key`.
    pub fn key_after(quiet: usize, key: char) -> Self {
        Self::new(std::iter::repeat(None).take(quiet).chain([Some(key)]))
    }

    /// Append more poll results to the end of the script.
    pub fn extend(&mut self, more: impl IntoIterator<Item = Option<char>>) {
        self.script.extend(more);
    }

    /// Number of polls performed so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Number of scripted entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_char(&mut self) -> Option<char> {
        self.polls += 1;
        self.script.pop_front().flatten()
    }
}
