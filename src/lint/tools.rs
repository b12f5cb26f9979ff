//! The fixed lint tool list

use std::fmt;
use std::path::Path;

/// Identifier of a lint tool, as used by `--skip-<id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolId {
    Ruff,
    Format,
    Pydoclint,
    Mypy,
}

impl ToolId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Ruff => "ruff",
            ToolId::Format => "format",
            ToolId::Pydoclint => "pydoclint",
            ToolId::Mypy => "mypy",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor for one lint tool
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub id: ToolId,
    pub label: &'static str,
    /// Program and subcommand placed before the target path
    command: &'static [&'static str],
    /// Flag that introduces the config file
    config_flag: &'static str,
    /// Flag appended in fix mode, for tools that can fix in place
    fix_flag: Option<&'static str>,
}

/// All lint tools, in the order they run
pub const TOOLS: [Tool; 4] = [
    Tool {
        id: ToolId::Ruff,
        label: "Ruff linting",
        command: &["ruff", "check"],
        config_flag: "--config",
        fix_flag: Some("--fix"),
    },
    Tool {
        id: ToolId::Format,
        label: "Ruff formatting",
        command: &["ruff", "format"],
        config_flag: "--config",
        fix_flag: None,
    },
    Tool {
        id: ToolId::Pydoclint,
        label: "Pydoclint docstring check",
        command: &["pydoclint"],
        config_flag: "--config",
        fix_flag: None,
    },
    Tool {
        id: ToolId::Mypy,
        label: "Mypy type checking",
        command: &["mypy"],
        config_flag: "--config-file",
        fix_flag: None,
    },
];

impl Tool {
    pub fn supports_fix(&self) -> bool {
        self.fix_flag.is_some()
    }

    /// Builds the argv for running this tool on `target`
    pub fn argv(&self, target: &Path, config: &str, fix: bool) -> Vec<String> {
        let mut argv: Vec<String> = self.command.iter().map(|s| s.to_string()).collect();
        argv.push(target.display().to_string());
        argv.push(self.config_flag.to_string());
        argv.push(config.to_string());
        if let (true, Some(flag)) = (fix, self.fix_flag) {
            argv.push(flag.to_string());
        }
        argv
    }
}
