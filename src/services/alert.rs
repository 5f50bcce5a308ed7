//! Completion alerts

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Fire-and-forget completion signal
///
/// Implementations handle their own failures; callers never observe them.
pub trait Notifier {
    fn notify(&self);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self) {
        (**self).notify()
    }
}

/// Ring the terminal bell
pub fn ring_bell() {
    let mut stdout = io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        warn!("Failed to ring terminal bell: {}", e);
    }
}

/// Audio player used when none is configured
pub fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else if cfg!(target_os = "windows") {
        "powershell"
    } else {
        "paplay"
    }
}

/// PowerShell command playing `sound`, with the path as a single-quoted literal
fn powershell_script(sound: &Path) -> String {
    let quoted = sound.display().to_string().replace('\'', "''");
    format!("(New-Object Media.SoundPlayer '{}').PlaySync()", quoted)
}

/// Plays a sound file through an external audio player
#[derive(Debug, Clone)]
pub struct SoundAlert {
    pub player: String,
    pub sound: PathBuf,
}

impl SoundAlert {
    pub fn new(player: impl Into<String>, sound: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            sound: sound.into(),
        }
    }

    /// Spawn the player without waiting for it
    ///
    /// Requires a Tokio runtime for the child process reaper.
    fn spawn_player(&self) -> Result<(), String> {
        if !self.sound.exists() {
            return Err(format!("sound file {} not found", self.sound.display()));
        }

        let mut command = Command::new(&self.player);
        if self.player == "powershell" {
            let script = powershell_script(&self.sound);
            command.args(["-NoProfile", "-Command", script.as_str()]);
        } else {
            command.arg(&self.sound);
        }

        let child = command
            .spawn()
            .map_err(|e| format!("Failed to execute {}: {}", self.player, e))?;

        debug!("Alert player {} spawned (pid {:?})", self.player, child.id());
        Ok(())
    }
}

impl Notifier for SoundAlert {
    fn notify(&self) {
        info!("Playing alert {}", self.sound.display());
        if let Err(e) = self.spawn_player() {
            warn!("Alert sound failed, ringing bell instead: {}", e);
            ring_bell();
        }
    }
}

/// Rings the terminal bell
#[derive(Debug, Clone, Copy, Default)]
pub struct BellAlert;

impl Notifier for BellAlert {
    fn notify(&self) {
        ring_bell();
    }
}

/// Does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAlert;

impl Notifier for SilentAlert {
    fn notify(&self) {
        debug!("Silent alert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_sound_file_does_not_panic() {
        let alert = SoundAlert::new(default_player(), "definitely/not/here.wav");
        assert!(alert.spawn_player().is_err());
        alert.notify();
    }

    #[tokio::test]
    async fn missing_player_is_reported() {
        let sound = std::env::temp_dir().join("countdown-clock-alert-test.wav");
        std::fs::write(&sound, b"RIFF").unwrap();

        let alert = SoundAlert::new("no-such-audio-player-binary", &sound);
        let err = alert.spawn_player().unwrap_err();
        assert!(err.contains("no-such-audio-player-binary"));
        alert.notify();

        let _ = std::fs::remove_file(sound);
    }

    #[test]
    fn powershell_path_quotes_are_doubled() {
        let script = powershell_script(Path::new("sounds/it's done.wav"));
        assert_eq!(
            script,
            "(New-Object Media.SoundPlayer 'sounds/it''s done.wav').PlaySync()"
        );
    }

    #[test]
    fn boxed_notifier_forwards() {
        let boxed: Box<dyn Notifier> = Box::new(SilentAlert);
        boxed.notify();
    }
}
