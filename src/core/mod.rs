//! Core domain models
//!
//! Run configuration, the rerun manifest location, runner command lines
//! and the results recorded for each attempt.

pub mod command;
pub mod config;
pub mod manifest;
pub mod state;

pub use command::*;
pub use config::*;
pub use manifest::*;
pub use state::*;
