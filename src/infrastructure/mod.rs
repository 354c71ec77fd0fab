//! Infrastructure layer: terminal collaborators and layout files.

pub mod terminal;
pub mod layout_file;

pub use terminal::*;
pub use layout_file::*;
