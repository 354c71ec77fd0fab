//! Terminal implementations of the composer ports.

use crate::application::{DisplaySink, EventSource};
use crate::domain::{InputEvent, Key, KeyTransition};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io::{self, Write};

/// Event source backed by crossterm key events.
///
/// Arrow keys and Enter map onto the five-key alphabet, Esc becomes the
/// abort signal, and everything else is skipped. Terminals without the
/// keyboard enhancement protocol never report key releases; for those,
/// presses are surfaced as releases so the composers still advance.
#[derive(Debug)]
pub struct CrosstermEvents {
    release_reported: bool,
}

impl CrosstermEvents {
    pub fn new(release_reported: bool) -> Self {
        Self { release_reported }
    }

    /// Probes the terminal for release reporting support.
    pub fn detect() -> Self {
        let supported = crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
        Self::new(supported)
    }
}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let transition = match key.kind {
                KeyEventKind::Release => KeyTransition::Release,
                KeyEventKind::Press if !self.release_reported => KeyTransition::Release,
                KeyEventKind::Press => KeyTransition::Press,
                KeyEventKind::Repeat => KeyTransition::Press,
            };
            let key = match key.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Enter => Key::Enter,
                KeyCode::Esc => return Ok(InputEvent::Abort),
                _ => continue,
            };
            return Ok(InputEvent::Key { key, transition });
        }
    }
}

/// Single-line live display over any writer.
///
/// Redraws in place with carriage returns, blanking the width of the
/// previous line first so a shorter line leaves no tail behind.
#[derive(Debug)]
pub struct LineDisplay<W: Write> {
    out: W,
    last_width: usize,
}

impl<W: Write> LineDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_width: 0 }
    }

    fn clear(&mut self) -> io::Result<()> {
        write!(self.out, "\r{:width$}\r", "", width = self.last_width)?;
        self.last_width = 0;
        Ok(())
    }
}

impl<W: Write> DisplaySink for LineDisplay<W> {
    fn render(&mut self, line: &str) -> io::Result<()> {
        self.clear()?;
        write!(self.out, "{line}\r")?;
        self.out.flush()?;
        self.last_width = line.chars().count();
        Ok(())
    }

    /// For a terminal there is no OS injection mode to leave; clearing
    /// the live line is the equivalent hand-back.
    fn deactivate_injection_mode(&mut self) -> io::Result<()> {
        self.clear()?;
        self.out.flush()
    }
}
