//! Countdown Clock - a terminal countdown timer with in-place progress gauges
//!
//! This is the main entry point for the countdown-clock application.

use std::io::{self, Stdout};

use tokio::{io::BufReader, sync::watch};
use tracing::{error, info};

use countdown_clock::{
    config::Config,
    render::restore,
    services::Notifier,
    state::{CountdownState, RunLog},
    tasks::{Menu, Mode, Session},
    utils::shutdown_signal,
    CountdownClock, WallClock,
};

type TerminalSession = Session<Stdout, WallClock, Box<dyn Notifier>>;

/// Run the requested mode, or the interactive menu when none was given
async fn run(session: &mut TerminalSession, mode: Option<Mode>) -> anyhow::Result<()> {
    match mode {
        Some(mode) => session.run_mode(&mode).await,
        None => Menu::new(BufReader::new(tokio::io::stdin())).run(session).await,
    }
}

fn print_summary(log: &RunLog, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(log)?);
    } else {
        println!("{}", log.summary());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // stdout belongs to the redrawn frame
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_clock={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting countdown-clock v{}", env!("CARGO_PKG_VERSION"));

    let mode = config.mode.clone().map(|m| m.into_mode()).transpose()?;
    let presets = config.presets()?;
    info!("Configuration: alert={:?}, presets={:?}", config.alert, presets);

    let (state_tx, state_rx) = watch::channel(CountdownState::new());
    let clock = CountdownClock::new(io::stdout(), WallClock::new(), config.notifier())
        .with_updates(state_tx);
    let mut session = Session::new(clock, presets);

    let outcome = tokio::select! {
        result = run(&mut session, mode) => Some(result),
        _ = shutdown_signal() => None,
    };
    let interrupted = outcome.is_none();

    match outcome {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            // A failed run can leave a hidden cursor mid-frame
            let frame_on_screen = state_rx.borrow().is_active();
            if let Err(restore_err) = restore(&mut io::stdout(), frame_on_screen) {
                error!("Failed to restore terminal: {}", restore_err);
            }
            return Err(e);
        }
        None => {
            let frame_on_screen = state_rx.borrow().is_active();
            restore(&mut io::stdout(), frame_on_screen)?;
            info!("Countdown interrupted");
        }
    }

    print_summary(session.log(), config.json_summary)?;

    if interrupted {
        // Runtime shutdown blocks on a pending stdin read
        std::process::exit(130);
    }
    Ok(())
}
