//! Banner command implementation
//!
//! This is the default path. It writes the title, description and version
//! lines to the given writer, then logs the stub notice.

use crate::config::{DESCRIPTION, TITLE, VERSION};
use std::io::{self, Write};

/// Notice logged after the banner until the simulation exists
pub const STUB_NOTICE: &str = "Weather simulation would start here...";

/// Write the three banner lines and log the stub notice
pub fn run_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", DESCRIPTION)?;
    writeln!(out, "Version: {}", VERSION)?;
    out.flush()?;

    tracing::info!("{}", STUB_NOTICE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut out = Vec::new();
        run_banner(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner_lines() {
        let text = render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "wthrr - Weather simulation application",
                "This is a Go port of the wthrr weather effects application.",
                format!("Version: {}", VERSION).as_str(),
            ]
        );
    }

    #[test]
    fn test_banner_ends_with_newline() {
        assert!(render().ends_with('\n'));
    }

    #[test]
    fn test_stub_notice_not_on_writer() {
        assert!(!render().contains(STUB_NOTICE));
    }

    #[test]
    fn test_banner_is_repeatable() {
        assert_eq!(render(), render());
    }
}
