//! Countdown state structure and transitions

use serde::{Deserialize, Serialize};

/// Authoritative state of one countdown run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    total_seconds: u64,
    remaining_seconds: u64,
    completed: bool,
    /// True between `start` and the final frame
    active: bool,
}

impl CountdownState {
    /// Create an idle state that has never run
    pub fn new() -> Self {
        Self {
            total_seconds: 0,
            remaining_seconds: 0,
            completed: false,
            active: false,
        }
    }

    /// Begin a new run of `total_seconds`, discarding the previous one
    pub fn reset(&mut self, total_seconds: u64) {
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
        self.completed = false;
        self.active = true;
    }

    /// Consume one second
    pub fn tick(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// Mark the terminal tick as reached
    pub fn complete(&mut self) {
        debug_assert_eq!(self.remaining_seconds, 0);
        self.completed = true;
        self.active = false;
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Check if a run is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}
