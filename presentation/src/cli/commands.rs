//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use testcrew_domain::PipelineKind;

/// Arguments shared by the pipeline subcommands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverArgs {
    /// Input file name without extension (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub input: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the interactive menu (default)
    Menu,
    /// Use case (casos_uso/<name>.txt) → Gherkin feature
    Gherkin(DriverArgs),
    /// Gherkin feature (features/<name>.feature) → C# xUnit step definitions
    Xunit(DriverArgs),
    /// Gherkin feature (features/<name>.feature) → IEEE 829 test plan
    Ieee(DriverArgs),
    /// IEEE 829 plan (andes/<name>.andes) → Gherkin feature
    IeeeToGherkin(DriverArgs),
}

impl Command {
    /// Pipeline run by this subcommand, if any
    pub fn pipeline(&self) -> Option<(PipelineKind, &DriverArgs)> {
        match self {
            Command::Menu => None,
            Command::Gherkin(args) => Some((PipelineKind::Gherkin, args)),
            Command::Xunit(args) => Some((PipelineKind::Xunit, args)),
            Command::Ieee(args) => Some((PipelineKind::Ieee, args)),
            Command::IeeeToGherkin(args) => Some((PipelineKind::IeeeToGherkin, args)),
        }
    }
}

/// CLI arguments for testcrew
#[derive(Parser, Debug)]
#[command(name = "testcrew")]
#[command(author, version, about = "Multi-agent LLM crews that write test artifacts")]
#[command(long_about = r#"
testcrew runs a writer → reviewer → manager crew of LLM agents to turn one
testing artifact into another:

  gherkin           use case          → Gherkin feature
  xunit             Gherkin feature   → C# xUnit step definitions
  ieee              Gherkin feature   → IEEE 829 test plan
  ieee-to-gherkin   IEEE 829 plan     → Gherkin feature

Without a subcommand an interactive menu is shown.

Configuration files are loaded from (in priority order):
1. --config <path>                         Explicit config file
2. ./testcrew.toml                         Project-level config
3. ~/.config/testcrew/config.toml          Global config

Model settings come from the environment (a local .env file is honoured):
LLM_MODEL, LLM_TEMPERATURE and GROQ_API_KEY.

Example:
  testcrew ieee --input login
  LLM_MODEL=groq/llama-3.3-70b-versatile testcrew gherkin
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Subcommand to run; no subcommand means the menu
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }

    /// Flags a spawned driver should inherit from this invocation
    pub fn forwarded_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.verbose > 0 {
            args.push(format!("-{}", "v".repeat(self.verbose as usize)));
        }
        if self.quiet {
            args.push("--quiet".to_string());
        }
        if let Some(path) = &self.config {
            args.push("--config".to_string());
            args.push(path.display().to_string());
        }
        args
    }
}
