//! Command validation and dispatch
//!
//! Commands arrive from two independent channels: the network API
//! (request/response) and the messaging channel (fire-and-forget text
//! frames). Both go through [`Dispatcher`], which validates in the
//! caller's context and enqueues for the engine to apply at the next
//! tick. Invalid commands never reach the queue, so a rejected command
//! leaves all state untouched.

use crate::config::{MAX_SPEED, MIN_SPEED, SharedStripLen};
use crate::pattern::PatternId;
use crate::queue::CommandQueue;

/// A control request carrying raw, not-yet-validated values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Change the number of physical LEDs.
    SetStripLength(i64),
    /// Change the animation speed multiplier.
    SetSpeed(f32),
    /// Change the manual draw color.
    SetColor { r: i64, g: i64, b: i64 },
    /// Set one manual mask entry. Latent until the manual pattern is
    /// selected.
    SetPixel { index: i64, on: bool },
    /// Switch the active pattern.
    SelectPattern(PatternId),
    /// Restart the whole process. Acknowledged, never enqueued.
    Reset,
}

/// Validation failure; the command was rejected with no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// LED count outside `1..=MAX_LEDS`.
    InvalidLedCount,
    /// Speed outside the accepted range, or not finite.
    InvalidSpeed,
    /// A color channel outside `0..=255`.
    InvalidColor,
    /// Pixel index outside the current strip length.
    InvalidLedIndex,
    /// Command queue full; the command was dropped.
    Overloaded,
}

/// Positive dispatch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Validated and queued; the engine applies it on the next tick.
    Accepted,
    /// The transport should acknowledge, then trigger a process restart.
    RestartRequested,
}

/// Validates commands against the published strip state and feeds the
/// engine's queue. One dispatcher per control channel is fine; they
/// share the queue.
#[derive(Clone, Copy)]
pub struct Dispatcher<'a, const MAX_LEDS: usize, const QUEUE: usize> {
    queue: &'a CommandQueue<QUEUE>,
    strip_len: &'a SharedStripLen,
}

impl<'a, const MAX_LEDS: usize, const QUEUE: usize> Dispatcher<'a, MAX_LEDS, QUEUE> {
    pub const fn new(queue: &'a CommandQueue<QUEUE>, strip_len: &'a SharedStripLen) -> Self {
        Self { queue, strip_len }
    }

    /// Validate and enqueue a command.
    ///
    /// Returns synchronously in the caller's context; application is
    /// deferred to the next render tick.
    pub fn dispatch(&self, command: Command) -> Result<Ack, CommandError> {
        self.validate(command)?;

        if matches!(command, Command::Reset) {
            return Ok(Ack::RestartRequested);
        }

        match self.queue.try_push(command) {
            Ok(()) => Ok(Ack::Accepted),
            Err(_) => {
                log::warn!("command queue full, dropping {:?}", command);
                Err(CommandError::Overloaded)
            }
        }
    }

    /// Handle a messaging-channel frame: a bare pattern name.
    ///
    /// The channel has no response path, so unknown payloads are logged
    /// and ignored.
    pub fn handle_pattern_message(&self, payload: &str) {
        let name = payload.trim();
        log::debug!("control message: {}", name);

        let Some(id) = PatternId::parse_from_str(name) else {
            return;
        };
        let _ = self.dispatch(Command::SelectPattern(id));
    }

    fn validate(&self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::SetStripLength(n) => {
                if n > 0 && n <= MAX_LEDS as i64 {
                    Ok(())
                } else {
                    Err(CommandError::InvalidLedCount)
                }
            }
            Command::SetSpeed(v) => {
                // NaN fails the range check.
                if (MIN_SPEED..=MAX_SPEED).contains(&v) {
                    Ok(())
                } else {
                    Err(CommandError::InvalidSpeed)
                }
            }
            Command::SetColor { r, g, b } => {
                let in_range = |c: i64| (0..=255).contains(&c);
                if in_range(r) && in_range(g) && in_range(b) {
                    Ok(())
                } else {
                    Err(CommandError::InvalidColor)
                }
            }
            Command::SetPixel { index, .. } => {
                let len = self.strip_len.get() as i64;
                if index >= 0 && index < len {
                    Ok(())
                } else {
                    Err(CommandError::InvalidLedIndex)
                }
            }
            Command::SelectPattern(_) | Command::Reset => Ok(()),
        }
    }
}
