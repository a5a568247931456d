//! Shared plumbing for the job board crates: logging setup, runtime
//! directory checks and small response types.

pub mod types;
pub mod utils;
pub mod env;
