//! Runs the test runner as a child process

use crate::core::{AttemptOutcome, RunnerCommand};
use crate::process::{CommandExecutor, RunnerError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Executor that spawns the runner and waits for it
///
/// The child inherits stdin/stdout/stderr so runner output reaches the
/// terminal as it is produced.
#[derive(Debug, Clone, Default)]
pub struct SubprocessExecutor {
    /// Timeout for one invocation in seconds
    timeout_secs: Option<u64>,
}

impl SubprocessExecutor {
    pub fn new(timeout_secs: Option<u64>) -> Self {
        Self { timeout_secs }
    }

    #[cfg(test)]
    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }
}

#[async_trait]
impl CommandExecutor for SubprocessExecutor {
    async fn execute(&self, command: &RunnerCommand) -> Result<AttemptOutcome, RunnerError> {
        debug!("Spawning {} with {} args", command.program, command.args.len());

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let waited = match self.timeout_secs {
            Some(secs) => {
                let limited = timeout(Duration::from_secs(secs), child.wait()).await;
                match limited {
                    Ok(waited) => waited,
                    Err(_) => {
                        warn!("{} timed out after {}s, killing it", command.program, secs);
                        if let Err(e) = child.kill().await {
                            warn!("Failed to kill {}: {}", command.program, e);
                        }
                        return Ok(AttemptOutcome::abnormal());
                    }
                }
            }
            None => child.wait().await,
        };

        let status = waited.map_err(|source| RunnerError::Wait {
            program: command.program.clone(),
            source,
        })?;

        let outcome = match status.code() {
            Some(code) => AttemptOutcome::new(code),
            None => {
                warn!("{} was terminated by a signal", command.program);
                AttemptOutcome::abnormal()
            }
        };
        debug!("{} exited with code {}", command.program, outcome.exit_code);

        Ok(outcome)
    }
}
