pub mod room;
pub mod timestamp;

pub use room::*;
