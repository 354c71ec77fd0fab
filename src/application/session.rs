//! Ports connecting composers to the outside world.
//!
//! A composer only ever talks to two collaborators: a blocking source of
//! directional events and a single-line display. Both are traits so the
//! same state machines run against a terminal, a HID hook, or the
//! in-memory doubles below.

use crate::domain::{InputEvent, Key};
use std::collections::VecDeque;
use std::io;

/// Blocking source of directional events.
pub trait EventSource {
    /// Waits for and returns the next event.
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Single-line live display. Receives one fully formed line per accepted
/// event and overwrites whatever it showed before.
pub trait DisplaySink {
    fn render(&mut self, line: &str) -> io::Result<()>;

    /// Called by the ternary composer on successful termination, where
    /// the original releases its global type-into-focused-window mode.
    fn deactivate_injection_mode(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Result of feeding one key into a composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(String),
}

/// An event source that replays a fixed script, then aborts. Useful in
/// tests and for hosts that drive a composer from recorded input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self { events: events.into_iter().collect() }
    }

    /// A script of release transitions for the given keys.
    pub fn releases(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(InputEvent::release))
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Abort))
    }
}

/// A display that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
