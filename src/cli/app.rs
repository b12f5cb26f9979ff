//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::Output;
use super::prompt::{Prompter, TerminalPrompter};
use super::{lint_cmd, pytest_cmd};
use crate::runner::{CommandRunner, ProcessRunner};
use crate::storage::SettingsStore;

#[derive(Parser)]
#[command(name = "tidy")]
#[command(author, version, about = "Run Python linters and tests from one place")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "TIDY_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run ruff, pydoclint and mypy
    #[command(subcommand)]
    Lint(lint_cmd::LintCommands),

    /// Run pytest, with coverage for full runs
    #[command(subcommand)]
    Pytest(pytest_cmd::PytestCommands),
}

/// Collaborators shared by every command
pub struct Context {
    pub store: SettingsStore,
    pub output: Output,
    pub runner: Box<dyn CommandRunner>,
    pub prompter: Box<dyn Prompter>,
}

impl Context {
    /// Context for a real terminal session
    pub fn terminal(store: SettingsStore) -> Self {
        Self {
            store,
            output: Output::terminal(),
            runner: Box::new(ProcessRunner),
            prompter: Box::new(TerminalPrompter),
        }
    }
}

/// Installs the stderr log subscriber
///
/// `RUST_LOG` wins when set, otherwise `--verbose` selects debug logs.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = match cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::open_default()?,
    };
    tracing::debug!(settings = %store.path().display(), "tidy starting");

    let ctx = Context::terminal(store);
    let code = match cli.command {
        Commands::Lint(cmd) => lint_cmd::run(cmd, &ctx)?,
        Commands::Pytest(cmd) => pytest_cmd::run(cmd, &ctx)?,
    };

    tracing::debug!("command completed");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lint_run_flags() {
        let cli = Cli::try_parse_from([
            "tidy", "lint", "run", "pkg", "--fix", "-i", "--skip-ruff", "--skip-mypy",
        ])
        .unwrap();

        match cli.command {
            Commands::Lint(lint_cmd::LintCommands::Run(args)) => {
                assert_eq!(args.path, Some(PathBuf::from("pkg")));
                assert!(args.fix);
                assert!(args.interactive);
                assert!(args.skip_ruff && args.skip_mypy);
                assert!(!args.skip_format && !args.skip_pydoclint);
            }
            _ => panic!("expected lint run"),
        }
    }

    #[test]
    fn parses_global_settings_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tidy", "pytest", "run", "--logs", "--settings", "/tmp/s.json",
        ])
        .unwrap();

        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/s.json")));
        assert!(matches!(
            cli.command,
            Commands::Pytest(pytest_cmd::PytestCommands::Run { logs: true, .. })
        ));
    }
}
