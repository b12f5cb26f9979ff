//! Pytest CLI commands

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use super::app::Context;
use crate::pytest::{self, PytestError, PytestOptions, TestRun};

#[derive(Subcommand)]
pub enum PytestCommands {
    /// Run a test file or directory, or every test under coverage
    Run {
        /// Test path relative to the default test directory
        path: Option<PathBuf>,

        /// Show test output instead of capturing it
        #[arg(long)]
        logs: bool,
    },

    /// Set the default test directory and config file
    Init,
}

pub fn run(cmd: PytestCommands, ctx: &Context) -> Result<ExitCode> {
    match cmd {
        PytestCommands::Run { path, logs } => {
            let options = PytestOptions { path, logs };
            tracing::debug!(?options, "pytest run");

            match TestRun::new(&ctx.store, ctx.runner.as_ref(), &ctx.output).run(&options) {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(PytestError::Settings(e)) => Err(e),
                // Already reported to the user
                Err(_) => Ok(ExitCode::FAILURE),
            }
        }
        PytestCommands::Init => {
            pytest::init(&ctx.store, ctx.prompter.as_ref(), &ctx.output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
