//! ctrcomp - Shell completion engine for container CLIs

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = ctrcomp::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
