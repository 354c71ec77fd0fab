//! The grid roll composer: picks characters from a 2-D layout.
//!
//! Up and down roll between layout rows, left and right move within a
//! row (or move the buffer cursor while on the text row), and enter
//! applies the selected cell. Enter on the text row confirms the string.

use crate::domain::{
    Cell, EditBuffer, GridPosition, InputEvent, Key, KeyTransition, Layout, LayoutError,
    ModifierState,
};
use crate::presentation::{buffer_line, roll_line};
use super::session::{DisplaySink, EventSource, Step};
use std::io;
use tracing::debug;

/// State machine for grid-based character entry.
///
/// Owns its layout for the session; alternate layouts are passed in as
/// values, never looked up globally.
#[derive(Debug)]
pub struct RollComposer {
    buffer: EditBuffer,
    layout: Layout,
    position: GridPosition,
    modifiers: ModifierState,
}

impl RollComposer {
    /// Starts a session over `initial` on the layout's text row.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the layout is structurally unsound,
    /// so misconfiguration surfaces here and never mid-session.
    pub fn new(initial: &str, layout: Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let position = GridPosition { row: layout.text_row, col: 0 };
        Ok(Self {
            buffer: EditBuffer::new(initial),
            layout,
            position,
            modifiers: ModifierState::default(),
        })
    }

    /// Runs the blocking session loop, mirroring
    /// [`TernaryComposer::compose`](super::TernaryComposer::compose):
    /// release transitions only, `Ok(None)` on abort.
    pub fn compose(
        mut self,
        source: &mut dyn EventSource,
        sink: &mut dyn DisplaySink,
    ) -> io::Result<Option<String>> {
        sink.render(&self.status_line())?;
        loop {
            let key = match source.next_event()? {
                InputEvent::Abort => return Ok(None),
                InputEvent::Key { key, transition: KeyTransition::Release } => key,
                InputEvent::Key { .. } => continue,
            };
            match self.handle_key(key) {
                Step::Continue => sink.render(&self.status_line())?,
                Step::Finished(text) => return Ok(Some(text)),
            }
        }
    }

    /// Feeds one released key into the state machine.
    pub fn handle_key(&mut self, key: Key) -> Step {
        let on_text_row = self.position.row == self.layout.text_row;
        match key {
            Key::Up => self.move_row(-1),
            Key::Down => self.move_row(1),
            Key::Left if on_text_row => self.buffer.move_left(),
            Key::Right if on_text_row => self.buffer.move_right(),
            Key::Left => {
                self.position.col = self.layout.clamp_col(self.position.row, self.position.col - 1);
            }
            Key::Right => {
                self.position.col = self.layout.clamp_col(self.position.row, self.position.col + 1);
            }
            Key::Enter if on_text_row => {
                let text = std::mem::take(&mut self.buffer).into_string();
                debug!(len = text.chars().count(), "session confirmed");
                return Step::Finished(text);
            }
            Key::Enter => self.apply_selected(),
        }
        Step::Continue
    }

    /// Moves one row up or down and re-clamps the column offset, keeping
    /// the horizontal intent as closely as the new row allows.
    fn move_row(&mut self, delta: i32) {
        let last = self.layout.row_count() - 1;
        self.position.row = self
            .position
            .row
            .saturating_add_signed(delta as isize)
            .min(last);
        self.position.col = self.layout.clamp_col(self.position.row, self.position.col);
    }

    /// Applies the selected cell and returns the selection to the text
    /// row's center.
    fn apply_selected(&mut self) {
        let absolute = self.layout.absolute_col(self.position.row, self.position.col);
        let cell = self.layout.row(self.position.row)[absolute];
        debug!(?cell, "applying cell");
        self.position = GridPosition { row: self.layout.text_row, col: 0 };
        match cell {
            Cell::Char(ch) => self.insert_cased(ch),
            Cell::Tab => self.insert_cased('\t'),
            Cell::Enter => self.insert_cased('\n'),
            Cell::Space => self.insert_cased(' '),
            Cell::Shift => self.modifiers.shift = !self.modifiers.shift,
            Cell::CapsLock => self.modifiers.caps = !self.modifiers.caps,
            Cell::Backspace => self.buffer.backspace(),
            Cell::Delete => self.buffer.delete(),
        }
    }

    /// Inserts a character with the shift-XOR-caps case rule, consuming
    /// the one-shot shift. Caseless characters pass through unchanged
    /// but still consume the shift, as the original does.
    fn insert_cased(&mut self, ch: char) {
        let ch = if self.modifiers.uppercase() {
            ch.to_uppercase().next().unwrap_or(ch)
        } else {
            ch
        };
        self.buffer.insert(ch);
        self.modifiers.consume_shift();
    }

    /// The line shown after every accepted event: the buffer view on the
    /// text row, the marked-up selection row anywhere else.
    pub fn status_line(&self) -> String {
        if self.position.row == self.layout.text_row {
            buffer_line(&self.buffer)
        } else {
            let absolute = self.layout.absolute_col(self.position.row, self.position.col);
            roll_line(&self.layout, self.position.row, absolute)
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }
}
