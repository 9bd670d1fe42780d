//! Artifact storage port
//!
//! Reading input artifacts and writing drafts/results. Paths are relative
//! to the store's root (normally the working directory).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },
}

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Read a text artifact. `Ok(None)` when the file does not exist.
    async fn read(&self, path: &str) -> Result<Option<String>, ArtifactError>;

    /// Write a text artifact, creating parent directories as needed
    async fn write(&self, path: &str, content: &str) -> Result<(), ArtifactError>;
}
