//! Retry orchestration

pub mod engine;
pub mod logger;

pub use engine::RetryRunner;
pub use logger::{RunLogger, TracingLogger};
