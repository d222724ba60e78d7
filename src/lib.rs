//! behave-rerun - runs a behave suite and retries failed scenarios

pub mod cli;
pub mod core;
pub mod execution;
pub mod process;

// Re-export commonly used types
pub use crate::core::{AttemptKind, AttemptOutcome, RerunManifest, RunConfig, RunSummary, RunnerCommand, RunnerSettings};
pub use crate::execution::{RetryRunner, RunLogger, TracingLogger};
pub use crate::process::{CommandExecutor, RunnerError, SubprocessExecutor};
