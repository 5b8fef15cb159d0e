//! Version command implementation

use crate::config::{APP_NAME, VERSION};
use std::io::{self, Write};

/// Write the version line, `wthrr version <V>`
pub fn run_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{} version {}", APP_NAME, VERSION)?;
    out.flush()
}
