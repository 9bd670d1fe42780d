//! Infrastructure layer for testcrew
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifacts;
pub mod config;
pub mod llm;
pub mod logging;
pub mod templates;

#[cfg(test)]
mod e2e_tests;

// Re-export commonly used types
pub use artifacts::LocalArtifactStore;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCrewConfig, FileLlmConfig,
    FilePathsConfig, read_llm_settings,
};
pub use llm::ChatCompletionsGateway;
pub use logging::FileExecutionLogger;
pub use templates::{TemplateStoreError, YamlTemplateStore};
