//! Directory layout from TOML (`[paths]` section)

use serde::{Deserialize, Serialize};

/// Raw directory layout, relative to the working directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// Holds `agents.yaml`, `tasks.yaml` and the optional `outputs.yaml`
    pub templates_dir: String,
    /// Gherkin `.feature` inputs
    pub features_dir: String,
    /// Plain-text use case inputs
    pub use_cases_dir: String,
    /// Directories searched for `.andes` plans, in order
    pub andes_dirs: Vec<String>,
    /// Writer/reviewer drafts
    pub drafts_dir: String,
    /// Final artifacts
    pub results_dir: String,
    /// Execution logs and diagnostic traces
    pub log_dir: String,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            templates_dir: "config".to_string(),
            features_dir: "features".to_string(),
            use_cases_dir: "casos_uso".to_string(),
            andes_dirs: vec!["andes".to_string(), "resposta".to_string()],
            drafts_dir: "etapas_geracao".to_string(),
            results_dir: "resposta".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}
