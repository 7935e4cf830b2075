pub mod coords;
pub mod frame;

pub use coords::*;
pub use frame::*;
