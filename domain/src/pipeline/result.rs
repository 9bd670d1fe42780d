//! Pipeline result value object

use super::descriptor::PipelineKind;
use crate::crew::value_objects::CrewOutput;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub kind: PipelineKind,
    /// Path the final artifact was written to
    pub artifact_path: String,
    pub output: CrewOutput,
}

impl PipelineResult {
    pub fn new(kind: PipelineKind, artifact_path: impl Into<String>, output: CrewOutput) -> Self {
        Self {
            kind,
            artifact_path: artifact_path.into(),
            output,
        }
    }

    /// Final approved text
    pub fn raw(&self) -> &str {
        &self.output.raw
    }

    pub fn duration(&self) -> Duration {
        self.output.duration
    }
}
