//! FIVEKEY - Five-Button Text Entry
//!
//! Text input for devices with only five keys: up, down, left, right,
//! enter. Two independent composers turn a stream of directional events
//! into a finished string:
//!
//! - [`TernaryComposer`] types any Unicode code point as a base-3 digit
//!   sequence (up = 0, right = 1, down = 2).
//! - [`RollComposer`] walks a character grid described by a [`Layout`]
//!   and picks one glyph or command per selection.
//!
//! Both block on an [`EventSource`] and push every redraw to a
//! [`DisplaySink`], so they run unchanged against a terminal, a HID
//! hook, or scripted input:
//!
//! ```
//! use fivekey::{Key, NullDisplay, ScriptedEvents, TernaryComposer};
//!
//! // Edit mode, digit 1, commit the character, confirm the string.
//! let mut events = ScriptedEvents::releases([Key::Up, Key::Right, Key::Enter, Key::Enter]);
//! let text = TernaryComposer::new("")
//!     .compose(&mut events, &mut NullDisplay)
//!     .unwrap();
//! assert_eq!(text, Some("\u{1}".to_string()));
//! ```

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
