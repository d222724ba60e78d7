//! Attempt and run results

use crate::core::command::AttemptKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Exit code reported when the runner was killed or timed out
pub const ABNORMAL_EXIT: i32 = -1;

/// Exit status of a single runner invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttemptOutcome {
    pub exit_code: i32,
}

impl AttemptOutcome {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn abnormal() -> Self {
        Self::new(ABNORMAL_EXIT)
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// One finished attempt
#[derive(Debug, Clone, Serialize)]
pub struct AttemptRecord {
    pub kind: AttemptKind,
    pub outcome: AttemptOutcome,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// Result of a whole run: the initial attempt followed by any retries
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub suite: String,
    pub manifest: PathBuf,
    pub max_retries: u32,
    pub attempts: Vec<AttemptRecord>,
}

impl RunSummary {
    pub fn new(suite: impl Into<String>, manifest: impl Into<PathBuf>, max_retries: u32) -> Self {
        Self {
            suite: suite.into(),
            manifest: manifest.into(),
            max_retries,
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, record: AttemptRecord) {
        self.attempts.push(record);
    }

    /// The last attempt decides the run
    pub fn passed(&self) -> bool {
        self.attempts.last().is_some_and(|a| a.outcome.success())
    }

    /// Number of retry invocations that were launched
    pub fn retry_count(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a.kind, AttemptKind::Retry(_)))
            .count()
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
