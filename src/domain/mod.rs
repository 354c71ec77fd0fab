pub mod models;
pub mod layout;
pub mod errors;

pub use models::*;
pub use layout::*;
pub use errors::*;
