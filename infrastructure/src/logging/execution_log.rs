//! Plain-text execution log for crew runs.
//!
//! One line per [`ExecutionEvent`]: RFC3339 timestamp, event type in
//! brackets, then the payload as compact JSON. Appended through a buffered
//! writer and flushed after every line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use testcrew_application::{ExecutionEvent, ExecutionLogger};
use tracing::warn;

/// Execution logger writing to a text file.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct FileExecutionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileExecutionLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` if the file cannot be opened; runs continue unlogged.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create execution log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open execution log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn format_line(timestamp: &str, event: &ExecutionEvent) -> String {
    let payload = serde_json::to_string(&event.payload).unwrap_or_default();
    format!("{} [{}] {}", timestamp, event.event_type, payload)
}

impl ExecutionLogger for FileExecutionLogger {
    fn log(&self, event: ExecutionEvent) {
        let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false);
        let line = format_line(&timestamp, &event);

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for FileExecutionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
