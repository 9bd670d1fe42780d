//! Numbered menu dispatching to the pipeline drivers.

use super::launcher::ProcessLauncher;
use colored::Colorize;
use std::io::Write;
use testcrew_domain::PipelineKind;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// Entries in display order; the exit entry follows them
pub const MENU_ENTRIES: [(&str, PipelineKind); 3] = [
    ("1", PipelineKind::Gherkin),
    ("2", PipelineKind::Xunit),
    ("3", PipelineKind::Ieee),
];
pub const EXIT_CHOICE: &str = "4";

/// Why the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Quit,
    EndOfInput,
    Interrupted,
}

/// Interactive menu shell
pub struct MenuShell<L: ProcessLauncher> {
    launcher: L,
}

impl<L: ProcessLauncher> MenuShell<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Run on the process stdin/stdout until exit or Ctrl-C
    pub async fn run_interactive(&self) -> std::io::Result<MenuExit> {
        let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();

        tokio::select! {
            result = self.run(&mut stdin, &mut stdout) => result,
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("{}", "Interrupted, exiting.".yellow());
                Ok(MenuExit::Interrupted)
            }
        }
    }

    /// Menu loop over arbitrary input/output
    pub async fn run<R, W>(&self, input: &mut R, out: &mut W) -> std::io::Result<MenuExit>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        loop {
            Self::print_menu(out)?;

            let mut line = String::new();
            if input.read_line(&mut line).await? == 0 {
                writeln!(out, "Exiting...")?;
                return Ok(MenuExit::EndOfInput);
            }
            let choice = line.trim();

            if choice == EXIT_CHOICE {
                writeln!(out, "Exiting...")?;
                return Ok(MenuExit::Quit);
            }

            match MENU_ENTRIES.iter().find(|(key, _)| *key == choice) {
                Some((_, kind)) => self.dispatch(*kind, out).await?,
                None => writeln!(out, "{}", "Invalid option!".red())?,
            }
        }
    }

    fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "=== TESTCREW MENU ===".cyan().bold())?;
        for (key, kind) in MENU_ENTRIES {
            writeln!(out, "{}. {}", key, Self::label(kind))?;
        }
        writeln!(out, "{}. Exit", EXIT_CHOICE)?;
        out.flush()
    }

    fn label(kind: PipelineKind) -> &'static str {
        match kind {
            PipelineKind::Gherkin => "Generate Gherkin (.feature)",
            PipelineKind::Xunit => "Generate Steps (C# xUnit)",
            PipelineKind::Ieee => "Generate IEEE Test Plan",
            PipelineKind::IeeeToGherkin => "Generate Gherkin from IEEE Plan",
        }
    }

    async fn dispatch<W: Write>(&self, kind: PipelineKind, out: &mut W) -> std::io::Result<()> {
        info!("Menu: launching {} driver", kind);
        match self.launcher.launch(kind).await {
            Ok(exit) if exit.success => {}
            Ok(exit) => {
                let code = exit
                    .code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                warn!("{} driver exited with {}", kind, code);
                writeln!(
                    out,
                    "{} {} driver exited with status {}",
                    "Error:".red().bold(),
                    kind,
                    code
                )?;
            }
            Err(e) => {
                warn!("Failed to launch {} driver: {}", kind, e);
                writeln!(out, "{} could not start {}: {}", "Error:".red().bold(), kind, e)?;
            }
        }
        Ok(())
    }
}
