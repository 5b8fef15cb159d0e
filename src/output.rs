//! Diagnostics on stderr
//!
//! Command output on stdout is always plain text. Errors and warnings are
//! colored only when stderr is a terminal.

use crate::error::WthrrError;
use std::io::{self, IsTerminal};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Pick a color choice for stderr
pub fn stderr_color_choice() -> ColorChoice {
    if io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Write `<label>: <message>` with the label in the given color
pub fn write_labeled<W: WriteColor>(
    out: &mut W,
    label: &str,
    color: Color,
    message: &dyn std::fmt::Display,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}:", label)?;
    out.reset()?;
    writeln!(out, " {}", message)
}

/// Report a fatal error on stderr
pub fn report_error(err: &WthrrError) {
    let mut stderr = StandardStream::stderr(stderr_color_choice());
    // Nothing left to report to if stderr is gone too
    let _ = write_labeled(&mut stderr, "Error", Color::Red, err);
}

/// Report a non-fatal problem on stderr
pub fn report_warning(err: &WthrrError) {
    let mut stderr = StandardStream::stderr(stderr_color_choice());
    let _ = write_labeled(&mut stderr, "Warning", Color::Yellow, err);
}
