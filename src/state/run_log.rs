//! Record of completed runs within one process

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render::format_clock;

/// One completed countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub label: String,
    pub planned_seconds: u64,
    pub finished_at: DateTime<Utc>,
}

/// All runs completed since the process started
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunLog {
    pub runs: Vec<RunRecord>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run that finished just now
    pub fn record(&mut self, label: &str, planned_seconds: u64) {
        self.runs.push(RunRecord {
            label: label.to_string(),
            planned_seconds,
            finished_at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Sum of planned seconds across every run
    pub fn total_seconds(&self) -> u64 {
        self.runs.iter().map(|r| r.planned_seconds).sum()
    }

    /// Human-readable summary, one line per run
    pub fn summary(&self) -> String {
        if self.runs.is_empty() {
            return "  No timers completed.".to_string();
        }

        let mut out = String::from("  Session summary:\n");
        for (i, run) in self.runs.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {} (finished {})\n",
                i + 1,
                run.label,
                format_clock(run.planned_seconds),
                run.finished_at.format("%H:%M:%S"),
            ));
        }
        out.push_str(&format!("  Total: {}", format_clock(self.total_seconds())));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_runs_in_order() {
        let mut log = RunLog::new();
        assert_eq!(log.summary(), "  No timers completed.");

        log.record("Sprint", 2400);
        log.record("Break", 300);

        let summary = log.summary();
        assert_eq!(log.len(), 2);
        assert_eq!(log.total_seconds(), 2700);
        assert!(summary.contains("1. Sprint 40:00"));
        assert!(summary.contains("2. Break 05:00"));
        assert!(summary.ends_with("Total: 45:00"));
    }

    #[test]
    fn serializes_to_json() {
        let mut log = RunLog::new();
        log.record("Custom", 65);

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["runs"][0]["label"], "Custom");
        assert_eq!(json["runs"][0]["planned_seconds"], 65);
        assert!(json["runs"][0]["finished_at"].is_string());
    }
}
