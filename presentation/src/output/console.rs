//! Console output formatter for pipeline results

use colored::Colorize;
use std::time::Duration;
use testcrew_domain::PipelineResult;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Result banner, the final document, and the execution time
    pub fn format(result: &PipelineResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(result.kind.display_name()));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n\n",
            "Saved to:".cyan().bold(),
            result.artifact_path
        ));

        output.push_str(result.raw().trim_end());
        output.push('\n');

        output.push_str(&Self::footer());
        output.push_str(&Self::execution_time(result.duration()));
        output.push('\n');

        output
    }

    /// Only the final document
    pub fn format_raw(result: &PipelineResult) -> String {
        format!("{}\n", result.raw().trim_end())
    }

    pub fn execution_time(duration: Duration) -> String {
        format!(
            "{} {}",
            "Execution time:".dimmed(),
            Self::format_duration(duration)
        )
    }

    /// Seconds with two decimals, with minutes once past a minute
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            format!("{:.2}s", secs)
        } else {
            let minutes = (secs / 60.0).floor();
            format!("{}m {:.2}s", minutes as u64, secs - minutes * 60.0)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
