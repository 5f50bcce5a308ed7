//! Orchestration module
//! 
//! This module contains the timer modes, the session that runs them on one
//! clock, and the interactive menu.

pub mod menu;
pub mod session;

// Re-export main types
pub use menu::{Menu, MenuChoice};
pub use session::{Mode, Presets, Session};
