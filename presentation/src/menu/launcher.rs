//! Spawning pipeline drivers as child processes.

use async_trait::async_trait;
use std::path::PathBuf;
use testcrew_domain::PipelineKind;
use tracing::debug;

/// How a driver process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    pub success: bool,
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ChildExit {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// Runs one pipeline driver to completion
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn launch(&self, kind: PipelineKind) -> std::io::Result<ChildExit>;
}

/// Launches `<program> <extra args> <subcommand>` with inherited stdio
pub struct SubprocessLauncher {
    program: PathBuf,
    extra_args: Vec<String>,
}

impl SubprocessLauncher {
    pub fn new(program: impl Into<PathBuf>, extra_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            extra_args,
        }
    }

    /// Launcher re-invoking the running executable
    pub fn current_exe(extra_args: Vec<String>) -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?, extra_args))
    }

    pub fn args_for(&self, kind: PipelineKind) -> Vec<String> {
        let mut args = self.extra_args.clone();
        args.push(kind.as_str().to_string());
        args
    }
}

#[async_trait]
impl ProcessLauncher for SubprocessLauncher {
    async fn launch(&self, kind: PipelineKind) -> std::io::Result<ChildExit> {
        let args = self.args_for(kind);
        debug!("Spawning {} {}", self.program.display(), args.join(" "));

        let status = tokio::process::Command::new(&self.program)
            .args(&args)
            .status()
            .await?;

        Ok(ChildExit {
            success: status.success(),
            code: status.code(),
        })
    }
}
