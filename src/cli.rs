//! CLI argument parsing and command dispatch

pub mod args;
pub mod banner;
pub mod common;
pub mod version;

// Re-export types for convenient access
pub use args::Command;
pub use common::{EXIT_ERROR, EXIT_SUCCESS, dispatch, run, run_with};
