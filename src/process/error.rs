//! Runner process errors

use thiserror::Error;

/// Failure to run the test runner at all
///
/// A runner that starts and reports failing scenarios is not an error; that
/// is a non-zero [`AttemptOutcome`](crate::core::AttemptOutcome).
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
