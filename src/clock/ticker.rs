//! Tick sources that pace the countdown

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Suspension point between two frames
pub trait TickSource {
    /// Called once at the start of every run
    fn reset(&mut self) {}

    /// Resolve when the next tick is due
    fn tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Ticks once per period of wall-clock time
#[derive(Debug)]
pub struct WallClock {
    interval: Interval,
}

impl WallClock {
    /// One tick per second
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        // A slow terminal delays the next tick instead of bursting to catch up
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn reset(&mut self) {
        self.interval.reset();
    }

    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
