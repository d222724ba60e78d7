//! Command-line interface

pub mod output;

use crate::core::{RunConfig, RunnerSettings, DEFAULT_FORMATTER, DEFAULT_PROGRAM};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Run a behave suite and retry the scenarios that failed
#[derive(Debug, Parser, Clone)]
#[command(name = "behave-rerun")]
#[command(version = "0.1.0")]
#[command(about = "Run a behave suite and retry failed scenarios from the rerun file", long_about = None)]
pub struct Cli {
    /// How many times to rerun failing scenarios after the initial run
    pub max_retries: u32,

    /// Feature path or tag expression to run
    #[arg(allow_hyphen_values = true)]
    pub suite: String,

    /// Directory the report formatter writes results into
    #[arg(allow_hyphen_values = true)]
    pub results_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Test runner executable
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub runner: String,

    /// Report formatter plugin passed with -f
    #[arg(long, default_value = DEFAULT_FORMATTER)]
    pub formatter: String,

    /// Directory for the rerun file
    #[arg(long, default_value = ".")]
    pub manifest_dir: PathBuf,

    /// Pause before each retry, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub retry_delay_ms: u64,

    /// Kill an attempt that runs longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Have retries rewrite the rerun file with the scenarios still failing
    #[arg(long)]
    pub refresh_manifest: bool,

    /// Print a JSON summary of all attempts when done
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Build the run configuration from the parsed arguments
    pub fn run_config(&self) -> RunConfig {
        let mut runner = RunnerSettings::new()
            .with_program(self.runner.as_str())
            .with_formatter(self.formatter.as_str())
            .with_manifest_dir(self.manifest_dir.clone())
            .with_retry_delay(Duration::from_millis(self.retry_delay_ms))
            .with_refresh_manifest(self.refresh_manifest);
        if let Some(secs) = self.timeout_secs {
            runner = runner.with_timeout(secs);
        }

        RunConfig::new(self.max_retries, self.suite.as_str(), self.results_dir.clone()).with_runner(runner)
    }
}

/// Exit code for a rejected command line (help and version exit 0)
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
