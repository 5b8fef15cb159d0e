//! Dispatch and exit codes shared by the entry point

use crate::cli::args::Command;
use crate::cli::{banner, version};
use crate::error::WthrrError;
use crate::output;
use std::io::{self, Write};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Run the selected command against a writer
///
/// # Errors
///
/// Returns `WthrrError::Io` if writing to `out` fails.
pub fn dispatch<W: Write>(command: Command, out: &mut W) -> Result<(), WthrrError> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::ShowVersion => version::run_version(out)?,
        Command::ShowBanner => banner::run_banner(out)?,
    }
    Ok(())
}

/// Run the selected command against stdout
pub fn run(command: Command) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(command, &mut out)
}

/// Run the selected command against a writer and map the result to an exit code
///
/// A reader that hangs up early (`BrokenPipe`) is not an error: the process
/// exits quietly with success, like other filters in a pipeline.
///
/// # Returns
///
/// Exit code:
/// - 0: Success, or the reader closed the pipe
/// - 2: Error (output could not be written)
pub fn run_with<W: Write>(command: Command, out: &mut W) -> i32 {
    match dispatch(command, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(WthrrError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed early: {}", e);
            EXIT_SUCCESS
        }
        Err(e) => {
            output::report_error(&e);
            EXIT_ERROR
        }
    }
}
