//! Test utilities for wthrr integration tests

#![allow(dead_code)]

use assert_cmd::Command;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Banner written for every invocation that is not `version`
pub const BANNER: &str = "wthrr - Weather simulation application\n\
This is a Go port of the wthrr weather effects application.\n\
Version: dev\n";

/// Stub notice logged after the banner
pub const STUB_NOTICE: &str = "Weather simulation would start here...";

/// Build a command for the wthrr binary with a predictable log filter
pub fn wthrr() -> TestResult<Command> {
    let mut cmd = Command::cargo_bin("wthrr")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
