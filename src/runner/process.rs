//! Production runner over `std::process::Command`

use std::io;
use std::process::Command;

use super::{CapturedOutput, CommandRunner};

/// Runs commands as real child processes
pub struct ProcessRunner;

impl ProcessRunner {
    fn command(argv: &[String]) -> io::Result<Command> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
        let mut command = Command::new(program);
        command.args(args);
        Ok(command)
    }
}

impl CommandRunner for ProcessRunner {
    fn capture(&self, argv: &[String]) -> io::Result<CapturedOutput> {
        tracing::debug!(?argv, "running with captured output");
        let output = Self::command(argv)?.output()?;

        Ok(CapturedOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn stream(&self, argv: &[String]) -> io::Result<i32> {
        tracing::debug!(?argv, "running with inherited stdio");
        let status = Self::command(argv)?.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}
