//! Error types for wthrr
//!
//! Argument handling itself never fails; the variants here cover writing
//! output and installing the log subscriber.

/// Top-level error type for wthrr
#[derive(Debug, thiserror::Error)]
pub enum WthrrError {
    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
