//! Fakes shared by the integration tests

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use countdown_clock::{clock::TickSource, services::Notifier};

/// Tick source that returns immediately and counts calls
#[derive(Debug, Default)]
pub struct CountingTicks {
    pub ticks: u64,
    pub resets: u64,
}

impl TickSource for CountingTicks {
    fn reset(&mut self) {
        self.resets += 1;
    }

    async fn tick(&mut self) {
        self.ticks += 1;
    }
}

/// Notifier that counts how often it fired
#[derive(Debug, Clone, Default)]
pub struct RecordingAlert(Arc<AtomicUsize>);

impl RecordingAlert {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingAlert {
    fn notify(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// One drawn frame, as text
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    pub clock: String,
    pub minutes: String,
    pub seconds: String,
}

/// Field text between `label` and the clear-line sequence that ends it
fn field(segment: &str, label: &str) -> String {
    let start = segment.find(label).expect("label present") + label.len();
    let rest = &segment[start..];
    let end = rest.find("\x1b[K").expect("line terminated");
    rest[..end].to_string()
}

/// Split raw output into the frames it contains
pub fn frames(out: &[u8]) -> Vec<Frame> {
    let text = String::from_utf8_lossy(out);
    text.split("Time Remaining: ")
        .skip(1)
        .map(|segment| Frame {
            clock: segment[..5].to_string(),
            minutes: field(segment, "Minutes: "),
            seconds: field(segment, "Seconds: "),
        })
        .collect()
}

pub fn filled(gauge: &str, glyph: char) -> usize {
    gauge.chars().filter(|c| *c == glyph).count()
}
