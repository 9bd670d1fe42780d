//! Interactive menu shell.

pub mod launcher;
pub mod shell;

pub use launcher::{ChildExit, ProcessLauncher, SubprocessLauncher};
pub use shell::{MenuExit, MenuShell};
