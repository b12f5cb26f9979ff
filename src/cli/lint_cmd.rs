//! Lint CLI commands

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::app::Context;
use crate::lint::{self, LintError, LintOptions, Linter, ToolId};

#[derive(Subcommand)]
pub enum LintCommands {
    /// Run the lint tools on the default directory or a path inside it
    Run(RunArgs),

    /// Set the default lint directory and config file
    Init,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path relative to the default lint directory
    pub path: Option<PathBuf>,

    /// Apply automatic fixes where the tool supports it
    #[arg(long)]
    pub fix: bool,

    /// Ask before running each tool
    #[arg(long, short)]
    pub interactive: bool,

    /// Skip `ruff check`
    #[arg(long)]
    pub skip_ruff: bool,

    /// Skip `ruff format`
    #[arg(long)]
    pub skip_format: bool,

    /// Skip `pydoclint`
    #[arg(long)]
    pub skip_pydoclint: bool,

    /// Skip `mypy`
    #[arg(long)]
    pub skip_mypy: bool,
}

impl RunArgs {
    fn skipped(&self) -> BTreeSet<ToolId> {
        [
            (self.skip_ruff, ToolId::Ruff),
            (self.skip_format, ToolId::Format),
            (self.skip_pydoclint, ToolId::Pydoclint),
            (self.skip_mypy, ToolId::Mypy),
        ]
        .into_iter()
        .filter_map(|(skip, id)| skip.then_some(id))
        .collect()
    }

    fn into_options(self) -> LintOptions {
        let skip = self.skipped();
        LintOptions {
            path: self.path,
            fix: self.fix,
            interactive: self.interactive,
            skip,
        }
    }
}

pub fn run(cmd: LintCommands, ctx: &Context) -> Result<ExitCode> {
    match cmd {
        LintCommands::Run(args) => run_tools(args, ctx),
        LintCommands::Init => {
            lint::init(&ctx.store, ctx.prompter.as_ref(), &ctx.output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_tools(args: RunArgs, ctx: &Context) -> Result<ExitCode> {
    let options = args.into_options();
    tracing::debug!(?options, "lint run");

    let linter = Linter::new(
        &ctx.store,
        ctx.runner.as_ref(),
        ctx.prompter.as_ref(),
        &ctx.output,
    );

    match linter.run(&options) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(LintError::PathNotFound(_)) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
