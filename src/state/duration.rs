//! Conversion of user-facing durations into whole seconds

use crate::error::ClockError;

/// Longest accepted timer; the minute gauge draws one cell per minute
pub const MAX_SECONDS: u64 = 24 * 60 * 60;

/// Seconds in `minutes` whole minutes
pub fn from_minutes(minutes: i64) -> Result<u64, ClockError> {
    from_parts(minutes, 0)
}

/// Seconds in `minutes` minutes plus `seconds` seconds
///
/// Negative components, overflow and totals above [`MAX_SECONDS`] are rejected.
pub fn from_parts(minutes: i64, seconds: i64) -> Result<u64, ClockError> {
    let invalid = || ClockError::InvalidDuration { minutes, seconds };

    if minutes < 0 || seconds < 0 {
        return Err(invalid());
    }

    let total = minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)?;

    u64::try_from(total)
        .ok()
        .filter(|total| *total <= MAX_SECONDS)
        .ok_or_else(invalid)
}

/// Seconds in an unsigned minute count, as taken from the command line
pub fn from_unsigned_minutes(minutes: u64) -> Result<u64, ClockError> {
    from_minutes(i64::try_from(minutes).unwrap_or(i64::MAX))
}
