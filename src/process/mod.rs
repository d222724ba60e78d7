//! Test runner process execution

pub mod error;
pub mod subprocess;

use crate::core::{AttemptOutcome, RunnerCommand};
use async_trait::async_trait;
pub use error::RunnerError;
pub use subprocess::SubprocessExecutor;

/// Trait for launching runner invocations - allows mocking the process layer
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command to completion and report its exit status
    async fn execute(&self, command: &RunnerCommand) -> Result<AttemptOutcome, RunnerError>;
}
