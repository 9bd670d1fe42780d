//! Application layer for testcrew
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod throttle;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::CrewParams;
pub use ports::{
    artifact_store::{ArtifactError, ArtifactStore},
    execution_logger::{ExecutionEvent, ExecutionLogger, NoExecutionLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use throttle::RequestThrottle;
pub use use_cases::run_crew::{CrewError, RunCrewUseCase};
pub use use_cases::run_pipeline::{
    LoadedInput, PipelineError, RunPipelineInput, RunPipelineUseCase,
};
