//! Logging infrastructure: per-run execution logs.
//!
//! Provides [`FileExecutionLogger`], a plain-text file writer that implements
//! the [`ExecutionLogger`](testcrew_application::ExecutionLogger) port.

mod execution_log;

pub use execution_log::FileExecutionLogger;
