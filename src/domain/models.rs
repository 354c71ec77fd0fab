/// Largest Unicode code point; ternary codes are clamped to this value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One of the five physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

/// Press/release edge of a key event. Composers act on releases only,
/// so hardware auto-repeat never double-fires a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Press,
    Release,
}

/// An event delivered by an event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, transition: KeyTransition },
    /// The host is ending the session without a commit.
    Abort,
}

impl InputEvent {
    pub fn press(key: Key) -> Self {
        InputEvent::Key { key, transition: KeyTransition::Press }
    }

    pub fn release(key: Key) -> Self {
        InputEvent::Key { key, transition: KeyTransition::Release }
    }
}

/// The text being edited: a sequence of scalar values plus a cursor in
/// `0..=len`. Owned by exactly one composer for the span of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl EditBuffer {
    pub fn new(initial: &str) -> Self {
        Self {
            chars: initial.chars().collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts at the cursor and advances it past the new character.
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Removes the character before the cursor. No-op at the start.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// Removes the character at the cursor. No-op at the end.
    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    pub fn after_cursor(&self) -> String {
        self.chars[self.cursor..].iter().collect()
    }

    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

/// A pending code point being typed digit-by-digit in base 3.
///
/// The digit string is never empty: it starts as `"0"` and resets to
/// `"0"` after every commit. Appending a zero while the value is still
/// zero is a no-op, so a committed code never carries leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryCode {
    digits: String,
}

impl Default for TernaryCode {
    fn default() -> Self {
        Self::new()
    }
}

impl TernaryCode {
    pub fn new() -> Self {
        Self { digits: String::from("0") }
    }

    /// Appends a digit in `0..=2`.
    pub fn append(&mut self, digit: u8) {
        debug_assert!(digit <= 2);
        if digit == 0 && self.digits == "0" {
            return;
        }
        self.digits.push(char::from(b'0' + digit));
    }

    /// Drops the last digit. With a single digit left the code resets to
    /// `"0"` instead and the return value signals that editing is over.
    pub fn drop_last(&mut self) -> bool {
        if self.digits.len() > 1 {
            self.digits.pop();
            true
        } else {
            self.digits = String::from("0");
            false
        }
    }

    pub fn reset(&mut self) {
        self.digits = String::from("0");
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The digit string read as base 3, clamped to [`MAX_CODE_POINT`].
    pub fn value(&self) -> u32 {
        self.digits
            .bytes()
            .fold(0u32, |value, digit| {
                value
                    .saturating_mul(3)
                    .saturating_add(u32::from(digit - b'0'))
            })
            .min(MAX_CODE_POINT)
    }

    /// The character this code would commit. Clamped values that fall in
    /// the surrogate gap render as U+FFFD.
    pub fn preview(&self) -> char {
        char::from_u32(self.value()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Shift/caps flags toggled by grid command cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// One-shot: cleared after every emitted character.
    pub shift: bool,
    pub caps: bool,
}

impl ModifierState {
    /// Characters are uppercased iff exactly one of shift/caps is set.
    pub fn uppercase(&self) -> bool {
        self.shift != self.caps
    }

    pub fn consume_shift(&mut self) {
        self.shift = false;
    }
}

/// Selection position in a layout grid: a row index plus a signed column
/// offset from that row's bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub col: i32,
}
