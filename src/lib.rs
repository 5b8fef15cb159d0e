#![forbid(unsafe_code)]

//! wthrr: Weather simulation application
//!
//! The crate currently provides the command-line entry point only: a
//! dispatcher that either reports the build version or prints the
//! application banner.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export error types for convenient access
pub use error::WthrrError;

// Re-export the dispatch type for convenient access
pub use cli::Command;
