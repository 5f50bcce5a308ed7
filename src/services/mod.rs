//! External collaborator module
//! 
//! This module contains the completion alerts the clock triggers.

pub mod alert;

// Re-export main types
pub use alert::{default_player, ring_bell, BellAlert, Notifier, SilentAlert, SoundAlert};
