//! Presentation layer: builds the single display line the sinks show.

pub mod display;

pub use display::*;
