//! State management module
//! 
//! This module contains the countdown state, duration conversion and the run log.

pub mod countdown_state;
pub mod duration;
pub mod run_log;

// Re-export main types
pub use countdown_state::CountdownState;
pub use run_log::{RunLog, RunRecord};
