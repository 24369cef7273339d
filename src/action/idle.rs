//! The unbounded idle wait.

use crate::config::KeyBindings;
use crate::core::{Outcome, State};
use crate::input::InputSource;
use crate::status::StatusSink;
use std::thread;
use std::time::Duration;

/// Wait until the operator presses the start key.
///
/// There is no timeout and no failure path: every other key is discarded
/// and polling continues, sleeping `poll_interval` after each empty poll.
/// Always returns [`Outcome::Success`].
pub fn run_idle_wait(
    keys: &KeyBindings,
    poll_interval: Duration,
    input: &mut impl InputSource,
    status: &mut impl StatusSink,
) -> Outcome {
    status.emit(&format!(
        "{}. Press {} to make a coffee.",
        State::Idling.prompt(),
        keys.start.to_ascii_uppercase()
    ));
    tracing::debug!("waiting for start key");

    loop {
        match input.poll_char() {
            Some(key) if keys.is_start(key) => return Outcome::Success,
            Some(key) => tracing::trace!(?key, "ignored key while idling"),
            None => thread::sleep(poll_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::status::RecordingSink;

    fn wait(input: &mut ScriptedInput) -> (Outcome, RecordingSink) {
        let mut sink = RecordingSink::new();
        let outcome = run_idle_wait(&KeyBindings::default(), Duration::ZERO, input, &mut sink);
        (outcome, sink)
    }

    #[test]
    fn start_key_ends_wait() {
        let mut input = ScriptedInput::keys("c");
        let (outcome, sink) = wait(&mut input);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(sink.lines(), ["Idling. Press C to make a coffee."]);
    }

    #[test]
    fn consumes_exactly_the_sequence_up_to_start() {
        let mut input = ScriptedInput::new([None, Some('f'), Some('F'), None, Some('q'), Some('C')]);
        input.extend([Some('x')]);
        let (outcome, _) = wait(&mut input);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(input.polls(), 6);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn abort_key_does_not_fail_idle() {
        let mut input = ScriptedInput::keys("ffffc");
        let (outcome, _) = wait(&mut input);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(input.polls(), 5);
    }
}
