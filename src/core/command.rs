//! Runner command lines

use crate::core::config::RunConfig;
use crate::core::manifest::RerunManifest;
use serde::Serialize;
use std::fmt;

/// Formatter that makes the runner list failing scenarios in a rerun file
pub const RERUN_FORMATTER: &str = "rerun";

/// Tag filter excluding scenarios marked `@skip`
pub const SKIP_TAG_FILTER: &str = "--tags=-skip";

/// Which invocation a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "attempt", rename_all = "snake_case")]
pub enum AttemptKind {
    Initial,
    /// 1-based retry number
    Retry(u32),
}

/// A fully built runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCommand {
    pub program: String,
    pub args: Vec<String>,
    pub kind: AttemptKind,
}

impl RunnerCommand {
    /// Run the whole suite, skipping `@skip`, and record failures in the manifest
    pub fn initial(config: &RunConfig, manifest: &RerunManifest) -> Self {
        let mut args = vec![config.suite.clone()];
        args.extend(report_args(config));
        args.push(SKIP_TAG_FILTER.to_string());
        args.extend(rerun_args(manifest));

        Self {
            program: config.runner.program.clone(),
            args,
            kind: AttemptKind::Initial,
        }
    }

    /// Run only the scenarios listed in the manifest
    pub fn retry(config: &RunConfig, manifest: &RerunManifest, attempt: u32) -> Self {
        let mut args = vec![manifest.indirect_target()];
        args.extend(report_args(config));
        if config.runner.refresh_manifest {
            args.extend(rerun_args(manifest));
        }

        Self {
            program: config.runner.program.clone(),
            args,
            kind: AttemptKind::Retry(attempt),
        }
    }
}

impl fmt::Display for RunnerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

fn report_args(config: &RunConfig) -> Vec<String> {
    vec![
        "-f".to_string(),
        config.runner.formatter.clone(),
        "-o".to_string(),
        config.results_dir.display().to_string(),
        "--no-capture".to_string(),
    ]
}

fn rerun_args(manifest: &RerunManifest) -> Vec<String> {
    vec![
        "-f".to_string(),
        RERUN_FORMATTER.to_string(),
        "-o".to_string(),
        manifest.path().display().to_string(),
    ]
}
