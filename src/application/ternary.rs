//! The ternary composer: types any Unicode code point on five keys.
//!
//! The user navigates the buffer in Navigation mode, switches to Edit
//! mode and taps out a base-3 code (up = 0, right = 1, down = 2), then
//! commits the character with enter. Enter in Navigation mode confirms
//! the whole string.

use crate::domain::{EditBuffer, InputEvent, Key, KeyTransition, TernaryCode};
use crate::presentation::ternary_line;
use super::session::{DisplaySink, EventSource, Step};
use std::io;
use tracing::{debug, trace};

/// Current interpretation of the directional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TernaryMode {
    /// Keys move the cursor or delete; up switches to Edit.
    Navigation,
    /// Keys append base-3 digits to the pending code.
    Edit,
}

impl TernaryMode {
    fn letter(self) -> char {
        match self {
            TernaryMode::Navigation => 'N',
            TernaryMode::Edit => 'E',
        }
    }
}

/// State machine for ternary code-point entry.
///
/// Every transition is total: out-of-range movement saturates and
/// malformed digit strings are impossible by construction, so feeding
/// keys can never fail. Only the blocking [`compose`](Self::compose)
/// session can return an error, and only from collaborator I/O.
#[derive(Debug)]
pub struct TernaryComposer {
    buffer: EditBuffer,
    code: TernaryCode,
    mode: TernaryMode,
}

impl TernaryComposer {
    /// Starts a session over `initial` with the cursor at the front, in
    /// Navigation mode with an all-zero pending code.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: EditBuffer::new(initial),
            code: TernaryCode::new(),
            mode: TernaryMode::Navigation,
        }
    }

    /// Runs the blocking session loop: render, await an event, feed it.
    ///
    /// Press transitions and auto-repeats are discarded; only releases
    /// advance the machine. Returns `Ok(Some(text))` once the user
    /// confirms in Navigation mode (after signalling the sink to leave
    /// injection mode), or `Ok(None)` if the source aborts the session.
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
                Step::Finished(text) => {
                    sink.deactivate_injection_mode()?;
                    return Ok(Some(text));
                }
            }
        }
    }

    /// Feeds one released key into the state machine.
    pub fn handle_key(&mut self, key: Key) -> Step {
        match self.mode {
            TernaryMode::Navigation => self.navigation_key(key),
            TernaryMode::Edit => self.edit_key(key),
        }
    }

    fn navigation_key(&mut self, key: Key) -> Step {
        match key {
            Key::Left => self.buffer.move_left(),
            Key::Right => self.buffer.move_right(),
            Key::Down => self.buffer.backspace(),
            Key::Up => {
                trace!("entering edit mode");
                self.mode = TernaryMode::Edit;
            }
            Key::Enter => {
                let text = std::mem::take(&mut self.buffer).into_string();
                debug!(len = text.chars().count(), "session confirmed");
                return Step::Finished(text);
            }
        }
        Step::Continue
    }

    fn edit_key(&mut self, key: Key) -> Step {
        match key {
            Key::Up => self.code.append(0),
            Key::Right => self.code.append(1),
            Key::Down => self.code.append(2),
            Key::Left => {
                if !self.code.drop_last() {
                    trace!("leaving edit mode");
                    self.mode = TernaryMode::Navigation;
                }
            }
            Key::Enter => {
                let ch = self.code.preview();
                debug!(digits = self.code.digits(), ?ch, "committed code point");
                self.buffer.insert(ch);
                self.code.reset();
                self.mode = TernaryMode::Navigation;
            }
        }
        Step::Continue
    }

    /// The line shown after every accepted event.
    pub fn status_line(&self) -> String {
        ternary_line(
            &self.buffer,
            self.code.preview(),
            self.mode.letter(),
            self.code.digits(),
        )
    }

    pub fn mode(&self) -> TernaryMode {
        self.mode
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::{NullDisplay, ScriptedEvents};
    use crate::domain::MAX_CODE_POINT;

    fn feed(composer: &mut TernaryComposer, keys: &[Key]) -> Option<String> {
        for &key in keys {
            if let Step::Finished(text) = composer.handle_key(key) {
                return Some(text);
            }
        }
        None
    }

    /// Keys that type `code` from Navigation mode and commit it.
    fn keys_for(code: u32) -> Vec<Key> {
        let mut digits = Vec::new();
        let mut rest = code;
        while rest > 0 {
            digits.push(rest % 3);
            rest /= 3;
        }
        let mut keys = vec![Key::Up];
        keys.extend(digits.iter().rev().map(|&digit| match digit {
            0 => Key::Up,
            1 => Key::Right,
            _ => Key::Down,
        }));
        keys.push(Key::Enter);
        keys
    }

    #[test]
    fn test_scenario_up_right_enter_enter() {
        let mut composer = TernaryComposer::new("");
        let result = feed(&mut composer, &[Key::Up, Key::Right, Key::Enter, Key::Enter]);
        assert_eq!(result, Some("\u{1}".to_string()));
    }

    #[test]
    fn test_round_trip_representative_code_points() {
        for code in [0, 1, 2, 3, 64, 65, 0x7A, 0x20AC, 0x1F600, MAX_CODE_POINT] {
            let mut composer = TernaryComposer::new("");
            let mut keys = keys_for(code);
            keys.push(Key::Enter);
            let expected = char::from_u32(code).unwrap().to_string();
            assert_eq!(feed(&mut composer, &keys), Some(expected), "code point {code:#x}");
        }
    }

    #[test]
    fn test_over_range_code_clamps() {
        let mut composer = TernaryComposer::new("");
        let mut keys = keys_for(MAX_CODE_POINT + 1);
        keys.push(Key::Enter);
        assert_eq!(feed(&mut composer, &keys), Some("\u{10FFFF}".to_string()));
    }

    #[test]
    fn test_surrogate_commits_replacement_character() {
        let mut composer = TernaryComposer::new("");
        let mut keys = keys_for(0xD800);
        keys.push(Key::Enter);
        assert_eq!(feed(&mut composer, &keys), Some("\u{FFFD}".to_string()));
    }

    #[test]
    fn test_navigation_never_grows_buffer() {
        let mut composer = TernaryComposer::new("abc");
        for key in [Key::Left, Key::Right, Key::Right, Key::Down, Key::Left, Key::Down, Key::Right] {
            composer.handle_key(key);
            assert!(composer.buffer().cursor() <= composer.buffer().len());
            assert!(composer.buffer().len() <= 3);
        }
    }

    #[test]
    fn test_navigation_down_deletes_before_cursor() {
        let mut composer = TernaryComposer::new("abc");
        composer.handle_key(Key::Right);
        composer.handle_key(Key::Right);
        composer.handle_key(Key::Down);
        let result = feed(&mut composer, &[Key::Enter]);
        assert_eq!(result, Some("ac".to_string()));
    }

    #[test]
    fn test_navigation_down_noop_at_start() {
        let mut composer = TernaryComposer::new("abc");
        composer.handle_key(Key::Down);
        assert_eq!(composer.buffer().len(), 3);
    }

    #[test]
    fn test_insert_at_cursor_position() {
        let mut composer = TernaryComposer::new("ac");
        composer.handle_key(Key::Right);
        // 'b' is 98 = 10122 base 3.
        let keys = [Key::Up, Key::Right, Key::Up, Key::Right, Key::Down, Key::Down, Key::Enter];
        feed(&mut composer, &keys);
        let result = feed(&mut composer, &[Key::Enter]);
        assert_eq!(result, Some("abc".to_string()));
    }

    #[test]
    fn test_edit_left_pops_digit_then_exits() {
        let mut composer = TernaryComposer::new("");
        composer.handle_key(Key::Up);
        assert_eq!(composer.mode(), TernaryMode::Edit);
        composer.handle_key(Key::Right);
        composer.handle_key(Key::Down);
        assert_eq!(composer.status_line(), "\u{2588}  [\\u{5}][E|12]");
        composer.handle_key(Key::Left);
        assert_eq!(composer.mode(), TernaryMode::Edit);
        composer.handle_key(Key::Left);
        assert_eq!(composer.mode(), TernaryMode::Navigation);
    }

    #[test]
    fn test_edit_up_guard_keeps_single_zero() {
        let mut composer = TernaryComposer::new("");
        composer.handle_key(Key::Up);
        composer.handle_key(Key::Up);
        composer.handle_key(Key::Up);
        assert_eq!(composer.status_line(), "\u{2588}  [\\0][E|0]");
    }

    #[test]
    fn test_compose_ignores_press_transitions() {
        let mut events = ScriptedEvents::new([
            InputEvent::press(Key::Down),
            InputEvent::press(Key::Down),
            InputEvent::release(Key::Up),
            InputEvent::release(Key::Right),
            InputEvent::release(Key::Enter),
            InputEvent::press(Key::Enter),
            InputEvent::release(Key::Enter),
        ]);
        let result = TernaryComposer::new("")
            .compose(&mut events, &mut NullDisplay)
            .unwrap();
        assert_eq!(result, Some("\u{1}".to_string()));
    }

    #[test]
    fn test_compose_abort_returns_none() {
        let mut events = ScriptedEvents::releases([Key::Up, Key::Right]);
        let result = TernaryComposer::new("draft")
            .compose(&mut events, &mut NullDisplay)
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_compose_deactivates_injection_on_confirm() {
        struct Recorder {
            deactivated: bool,
        }
        impl DisplaySink for Recorder {
            fn render(&mut self, _line: &str) -> io::Result<()> {
                Ok(())
            }
            fn deactivate_injection_mode(&mut self) -> io::Result<()> {
                self.deactivated = true;
                Ok(())
            }
        }
        let mut events = ScriptedEvents::releases([Key::Enter]);
        let mut sink = Recorder { deactivated: false };
        let result = TernaryComposer::new("done")
            .compose(&mut events, &mut sink)
            .unwrap();
        assert_eq!(result, Some("done".to_string()));
        assert!(sink.deactivated);
    }
}
