//! wthrr CLI entry point

use std::process;
use wthrr::cli::{self, Command};

fn main() {
    if let Err(e) = wthrr::logging::init_cli_logger() {
        wthrr::output::report_warning(&e);
    }

    let command = Command::from_env();
    process::exit(cli::run(command));
}
