//! tidy - Python linting and testing from one command surface

use std::process::ExitCode;

fn main() -> ExitCode {
    match tidy_cli::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
