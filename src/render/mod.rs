//! Frame rendering module
//!
//! Pure gauge computation plus the terminal sink that draws frames in place.

pub mod progress;
pub mod terminal;

// Re-export main types
pub use progress::{format_clock, render, Cell, DisplaySnapshot, Gauge};
pub use terminal::{restore, Terminal, FRAME_LINES};
