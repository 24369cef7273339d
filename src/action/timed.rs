//! Fixed-duration, abortable actions.

use crate::config::{ActionTiming, KeyBindings};
use crate::core::Outcome;
use crate::input::InputSource;
use crate::status::StatusSink;
use std::thread;

/// Run a bounded action named `name`.
///
/// Each tick waits `timing.tick_interval` and then polls `input` once. The
/// abort key resolves the action to [`Outcome::Failed`] immediately and
/// skips the remaining ticks; any other key is discarded. If every tick
/// passes without an abort the action succeeds.
///
/// Emits `"<name>. Press <abort> to cause a failure."` once, before the
/// first tick. A zero tick count polls nothing and succeeds; the controller
/// never runs one because [`MachineConfig::validate`](crate::config::MachineConfig::validate)
/// rejects it.
///
/// # Example
///
/// ```rust
/// use brewstate::action::run_timed_action;
/// use brewstate::config::{ActionTiming, KeyBindings};
/// use brewstate::core::Outcome;
/// use brewstate::input::ScriptedInput;
/// use brewstate::status::RecordingSink;
///
/// let mut input = ScriptedInput::key_after(2, 'F');
/// let mut sink = RecordingSink::new();
/// let outcome = run_timed_action(
///     "Heating up",
///     &ActionTiming::instant(20),
///     &KeyBindings::default(),
///     &mut input,
///     &mut sink,
/// );
///
/// assert_eq!(outcome, Outcome::Failed);
/// assert_eq!(input.polls(), 3);
/// assert_eq!(sink.lines(), ["Heating up. Press F to cause a failure."]);
/// ```
pub fn run_timed_action(
    name: &str,
    timing: &ActionTiming,
    keys: &KeyBindings,
    input: &mut impl InputSource,
    status: &mut impl StatusSink,
) -> Outcome {
    status.emit(&format!(
        "{name}. Press {} to cause a failure.",
        keys.abort.to_ascii_uppercase()
    ));
    tracing::debug!(action = name, ticks = timing.ticks, "action started");

    for tick in 0..timing.ticks {
        thread::sleep(timing.tick_interval);

        let Some(key) = input.poll_char() else {
            continue;
        };

        if keys.is_abort(key) {
            tracing::info!(action = name, tick, "action aborted by operator");
            return Outcome::Failed;
        }
        tracing::trace!(action = name, tick, ?key, "ignored key");
    }

    Outcome::Success
}
