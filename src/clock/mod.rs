//! Countdown engine module
//!
//! The clock itself and the tick sources that pace it.

pub mod countdown;
pub mod ticker;

// Re-export main types
pub use countdown::CountdownClock;
pub use ticker::{TickSource, WallClock};
