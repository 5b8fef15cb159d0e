//! Argument parsing
//!
//! Only the first user argument is looked at, and only the exact token
//! `version` selects anything other than the banner. There are no flags:
//! `--version`, `-h` and `--help` are ordinary tokens and fall through.

use std::ffi::OsStr;

/// Token that selects the version output
pub const VERSION_SUBCOMMAND: &str = "version";

/// What the process should print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print `wthrr version <V>`
    ShowVersion,
    /// Print the banner and the stub notice
    ShowBanner,
}

impl Command {
    /// Select a command from the full argument vector
    ///
    /// The first item is the program path and is skipped. Matching is
    /// case-sensitive and byte-exact, so non-UTF-8 tokens simply fall
    /// through to [`Command::ShowBanner`].
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match args.into_iter().nth(1) {
            Some(first) if first.as_ref() == VERSION_SUBCOMMAND => Command::ShowVersion,
            _ => Command::ShowBanner,
        }
    }

    /// Select a command from the arguments of the current process
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }
}
