//! Artifact store on the local file system.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use testcrew_application::{ArtifactError, ArtifactStore};
use tracing::debug;

/// Reads and writes artifacts relative to a root directory
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the current working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn read(&self, path: &str) -> Result<Option<String>, ArtifactError> {
        let full = self.resolve(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ArtifactError::Read {
                path: full.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn write(&self, path: &str, content: &str) -> Result<(), ArtifactError> {
        let full = self.resolve(path);
        let write_error = |e: std::io::Error| ArtifactError::Write {
            path: full.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(write_error)?;
        }
        tokio::fs::write(&full, content).await.map_err(write_error)?;

        debug!("Wrote {} bytes to {}", content.len(), full.display());
        Ok(())
    }
}
