//! Retry runner - the initial run followed by bounded reruns of failures

use crate::{
    core::{AttemptOutcome, AttemptRecord, RerunManifest, RunConfig, RunSummary, RunnerCommand},
    execution::{RunLogger, TracingLogger},
    process::{CommandExecutor, RunnerError},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Runs a suite and reruns its failing scenarios until they pass or the
/// retry budget is spent
///
/// Attempts run strictly one after another. Every retry points the runner
/// at the same manifest path, computed once per run.
pub struct RetryRunner<E> {
    executor: E,
    logger: Arc<dyn RunLogger>,
}

impl<E: CommandExecutor> RetryRunner<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RunLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute the run described by `config`
    ///
    /// Failing scenarios are reported through [`RunSummary::passed`]; an
    /// `Err` means the runner could not be launched at all.
    pub async fn run(&self, config: &RunConfig) -> Result<RunSummary, RunnerError> {
        let manifest = RerunManifest::for_suite(&config.suite, &config.runner.manifest_dir);
        let mut summary = RunSummary::new(config.suite.as_str(), manifest.path(), config.max_retries);

        let initial = RunnerCommand::initial(config, &manifest);
        self.logger.debug(&format!("Initial command: {}", initial));
        if self.attempt(&initial, &mut summary).await?.success() {
            self.logger.debug("All tests passed on initial attempt.");
            return Ok(summary);
        }

        for attempt in 1..=config.max_retries {
            if !config.runner.retry_delay.is_zero() {
                tokio::time::sleep(config.runner.retry_delay).await;
            }
            if !manifest.exists() {
                self.logger.warn(&format!(
                    "Rerun file {} not found before retry {}",
                    manifest.path().display(),
                    attempt
                ));
            }

            let retry = RunnerCommand::retry(config, &manifest, attempt);
            self.logger
                .debug(&format!("Retry command, attempt {}: {}", attempt, retry));

            if self.attempt(&retry, &mut summary).await?.success() {
                self.logger.debug(&format!("Test succeeded {}.", attempt));
                return Ok(summary);
            }
            self.logger.debug(&format!("Test failed attempt {}.", attempt));
        }

        self.logger.debug(&format!(
            "Tests failed even after {} retry attempts.",
            config.max_retries
        ));
        Ok(summary)
    }

    async fn attempt(
        &self,
        command: &RunnerCommand,
        summary: &mut RunSummary,
    ) -> Result<AttemptOutcome, RunnerError> {
        let started_at = Utc::now();
        let clock = Instant::now();
        let outcome = self.executor.execute(command).await?;

        summary.record(AttemptRecord {
            kind: command.kind,
            outcome,
            started_at,
            duration_ms: clock.elapsed().as_millis() as u64,
        });
        Ok(outcome)
    }
}
