//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types by the accessor methods below.

mod crew;
mod llm;
mod paths;

pub use crew::FileCrewConfig;
pub use llm::FileLlmConfig;
pub use paths::FilePathsConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use testcrew_application::CrewParams;
use testcrew_domain::{PipelineDescriptor, PipelineKind};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("llm.request_timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("{field} must be a finite number >= 0 (got {value})")]
    InvalidTemperature { field: &'static str, value: f64 },

    #[error("paths.{0} cannot be empty")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint settings
    pub llm: FileLlmConfig,
    /// Crew execution settings
    pub crew: FileCrewConfig,
    /// Directory layout
    pub paths: FilePathsConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.request_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let temperatures = [
            ("llm.low_temperature", self.llm.low_temperature),
            ("llm.high_temperature", Some(self.llm.high_temperature)),
        ];
        for (field, value) in temperatures {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(ConfigValidationError::InvalidTemperature { field, value });
            }
        }

        let paths = [
            ("templates_dir", &self.paths.templates_dir),
            ("results_dir", &self.paths.results_dir),
            ("log_dir", &self.paths.log_dir),
        ];
        for (field, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyPath(field));
            }
        }

        Ok(())
    }

    /// Throttle and temperature split for the pipeline driver
    pub fn crew_params(&self) -> CrewParams {
        CrewParams::default()
            .with_max_rpm(self.crew.max_rpm)
            .with_low_temperature(self.llm.low_temperature)
            .with_high_temperature(self.llm.high_temperature)
    }

    /// Built-in descriptor for `kind`, relocated to the configured directories
    pub fn descriptor(&self, kind: PipelineKind) -> PipelineDescriptor {
        let paths = &self.paths;
        let input_dirs = match kind {
            PipelineKind::Gherkin => vec![paths.use_cases_dir.clone()],
            PipelineKind::Xunit | PipelineKind::Ieee => vec![paths.features_dir.clone()],
            PipelineKind::IeeeToGherkin => paths.andes_dirs.clone(),
        };
        let drafts_dir = self
            .crew
            .save_stage_drafts
            .then(|| paths.drafts_dir.clone())
            .filter(|d| !d.trim().is_empty());

        PipelineDescriptor::builtin(kind)
            .with_input_dirs(input_dirs)
            .with_results_dir(&paths.results_dir)
            .with_drafts_dir(drafts_dir)
    }

    /// Execution log file for `descriptor`
    pub fn execution_log_path(&self, descriptor: &PipelineDescriptor) -> PathBuf {
        PathBuf::from(&self.paths.log_dir).join(&descriptor.log_file)
    }

    pub fn templates_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.templates_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.log_dir)
    }
}
