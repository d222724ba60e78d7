//! Run configuration

use std::path::PathBuf;
use std::time::Duration;

/// Formatter plugin used for the report output of every attempt
pub const DEFAULT_FORMATTER: &str = "allure_behave.formatter:AllureFormatter";

/// Test runner executable looked up on PATH when none is given
pub const DEFAULT_PROGRAM: &str = "behave";

/// How the test runner is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    /// Path to the runner executable
    pub program: String,

    /// Report formatter selected with `-f`
    pub formatter: String,

    /// Directory holding the rerun manifest
    pub manifest_dir: PathBuf,

    /// Pause before each retry attempt
    pub retry_delay: Duration,

    /// Per-attempt timeout in seconds (none blocks until the runner exits)
    pub timeout_secs: Option<u64>,

    /// Ask retry attempts to rewrite the manifest in place
    pub refresh_manifest: bool,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            formatter: DEFAULT_FORMATTER.to_string(),
            manifest_dir: PathBuf::from("."),
            retry_delay: Duration::ZERO,
            timeout_secs: None,
            refresh_manifest: false,
        }
    }
}

impl RunnerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = formatter.into();
        self
    }

    pub fn with_manifest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.manifest_dir = dir.into();
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn with_refresh_manifest(mut self, refresh: bool) -> Self {
        self.refresh_manifest = refresh;
        self
    }
}

/// Everything a single run needs, fixed for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of retry attempts allowed after a failed initial run
    pub max_retries: u32,

    /// Feature path or tag expression handed to the runner
    pub suite: String,

    /// Output directory for the report formatter
    pub results_dir: PathBuf,

    pub runner: RunnerSettings,
}

impl RunConfig {
    pub fn new(max_retries: u32, suite: impl Into<String>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            max_retries,
            suite: suite.into(),
            results_dir: results_dir.into(),
            runner: RunnerSettings::default(),
        }
    }

    pub fn with_runner(mut self, runner: RunnerSettings) -> Self {
        self.runner = runner;
        self
    }
}
