pub mod frame;
pub mod main;

pub use frame::*;
pub use main::*;
