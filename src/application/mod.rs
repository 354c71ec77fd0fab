//! Application layer: the two composer state machines and the ports
//! they drive.

pub mod session;
pub mod ternary;
pub mod roll;

pub use session::*;
pub use ternary::*;
pub use roll::*;
