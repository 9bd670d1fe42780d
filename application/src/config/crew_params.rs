//! Crew parameters: pipeline-wide execution control.
//!
//! [`CrewParams`] groups the static parameters used by
//! [`RunPipelineUseCase`](crate::use_cases::run_pipeline::RunPipelineUseCase)
//! and [`RunCrewUseCase`](crate::use_cases::run_crew::RunCrewUseCase).

use serde::{Deserialize, Serialize};

/// Execution control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewParams {
    /// Maximum number of model requests started per minute. `0` disables throttling.
    pub max_rpm: u32,
    /// Temperature for reviewer and manager agents. `None` uses the model defaults.
    pub low_temperature: Option<f64>,
    /// Temperature for writer agents.
    pub high_temperature: f64,
}

impl Default for CrewParams {
    fn default() -> Self {
        Self {
            max_rpm: 10,
            low_temperature: None,
            high_temperature: 0.6,
        }
    }
}

impl CrewParams {
    // ==================== Builder Methods ====================

    pub fn with_max_rpm(mut self, max_rpm: u32) -> Self {
        self.max_rpm = max_rpm;
        self
    }

    pub fn with_low_temperature(mut self, temperature: Option<f64>) -> Self {
        self.low_temperature = temperature;
        self
    }

    pub fn with_high_temperature(mut self, temperature: f64) -> Self {
        self.high_temperature = temperature;
        self
    }
}
