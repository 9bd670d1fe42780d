//! YAML template store.
//!
//! Reads `agents.yaml` and `tasks.yaml` (required) plus `outputs.yaml`
//! (optional) from one directory into a [`TemplateSet`].

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use testcrew_domain::{TemplateRecord, TemplateSet};
use thiserror::Error;
use tracing::debug;

pub const AGENTS_FILE: &str = "agents.yaml";
pub const TASKS_FILE: &str = "tasks.yaml";
pub const OUTPUTS_FILE: &str = "outputs.yaml";

/// Errors raised while loading template files
#[derive(Error, Debug)]
pub enum TemplateStoreError {
    #[error("Template file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Template store backed by a directory of YAML files
#[derive(Debug, Clone)]
pub struct YamlTemplateStore {
    dir: PathBuf,
}

impl YamlTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the three mappings
    pub fn load(&self) -> Result<TemplateSet, TemplateStoreError> {
        let agents: BTreeMap<String, TemplateRecord> = self.read_required(AGENTS_FILE)?;
        let tasks: BTreeMap<String, TemplateRecord> = self.read_required(TASKS_FILE)?;
        let outputs: BTreeMap<String, String> = self.read_optional(OUTPUTS_FILE)?;

        debug!(
            "Loaded {} agent and {} task templates from {}",
            agents.len(),
            tasks.len(),
            self.dir.display()
        );
        Ok(TemplateSet::new(agents, tasks, outputs))
    }

    fn read_required<T: DeserializeOwned + Default>(
        &self,
        file: &str,
    ) -> Result<T, TemplateStoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Err(TemplateStoreError::NotFound(path));
        }
        parse_file(&path)
    }

    fn read_optional<T: DeserializeOwned + Default>(
        &self,
        file: &str,
    ) -> Result<T, TemplateStoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        parse_file(&path)
    }
}

fn parse_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T, TemplateStoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| TemplateStoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document is an empty mapping
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&content).map_err(|source| TemplateStoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
