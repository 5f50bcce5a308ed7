//! The countdown clock

use std::io::Write;

use tokio::sync::watch;
use tracing::{debug, info};

use super::TickSource;
use crate::{
    error::ClockError,
    render::{render, Terminal},
    services::Notifier,
    state::CountdownState,
};

/// Counts a duration down to zero, one frame per tick
///
/// Reusable: every call to [`CountdownClock::start`] begins a fresh run.
#[derive(Debug)]
pub struct CountdownClock<W: Write, T, A> {
    state: CountdownState,
    terminal: Terminal<W>,
    ticker: T,
    alert: A,
    updates: Option<watch::Sender<CountdownState>>,
}

impl<W, T, A> CountdownClock<W, T, A>
where
    W: Write,
    T: TickSource,
    A: Notifier,
{
    pub fn new(out: W, ticker: T, alert: A) -> Self {
        Self {
            state: CountdownState::new(),
            terminal: Terminal::new(out),
            ticker,
            alert,
            updates: None,
        }
    }

    /// Publish every state change on `tx`
    pub fn with_updates(mut self, tx: watch::Sender<CountdownState>) -> Self {
        self.updates = Some(tx);
        self
    }

    /// Run a countdown of `total_seconds` to completion
    ///
    /// Returns once the final `00:00` frame is drawn and the alert has been
    /// triggered. Output errors abort the run.
    pub async fn start(&mut self, total_seconds: u64) -> Result<(), ClockError> {
        info!("Starting countdown of {}s", total_seconds);

        self.state.reset(total_seconds);
        self.publish();
        self.ticker.reset();

        self.terminal.begin()?;

        while self.state.remaining_seconds() > 0 {
            let remaining = self.state.remaining_seconds();
            let snapshot = render(total_seconds, remaining);
            debug!("Tick: {} remaining", snapshot.clock_text());

            self.terminal.draw(&snapshot)?;
            self.terminal.rewind()?;

            self.ticker.tick().await;
            self.state.tick();
            self.publish();
        }

        // The loop exits before drawing zero
        self.terminal.draw(&render(total_seconds, 0))?;
        self.terminal.finish()?;

        self.state.complete();
        self.publish();
        info!("Countdown of {}s complete", total_seconds);

        self.alert.notify();
        Ok(())
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn total_seconds(&self) -> u64 {
        self.state.total_seconds()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds()
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// The output sink, for writing text between runs
    pub fn output(&mut self) -> &mut W {
        self.terminal.get_mut()
    }

    pub fn output_ref(&self) -> &W {
        self.terminal.get_ref()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    fn publish(&self) {
        if let Some(tx) = &self.updates {
            tx.send_replace(self.state);
        }
    }
}
