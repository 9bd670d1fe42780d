//! Presentation layer for testcrew
//!
//! This crate contains CLI definitions, the interactive menu, output
//! formatters and progress reporters.

pub mod cli;
pub mod menu;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, DriverArgs};
pub use cli::prompt::read_input_name;
pub use menu::{ChildExit, MenuExit, MenuShell, ProcessLauncher, SubprocessLauncher};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
