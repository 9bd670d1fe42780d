//! Run Pipeline use case
//!
//! The generic writer → reviewer → manager driver. A [`PipelineDescriptor`]
//! supplies the template names, placeholder and output locations; everything
//! else is identical across the transformations.

use crate::config::CrewParams;
use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::execution_logger::{ExecutionLogger, NoExecutionLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::run_crew::{CrewError, RunCrewUseCase};
use std::sync::Arc;
use testcrew_domain::{
    AgentFactory, ConfigError, CrewPlan, ModelClientFactory, PipelineDescriptor, PipelineResult,
    PlanError, TaskFactory, TemplateError, TemplateSet,
};
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while running a pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid pipeline plan: {0}")]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Crew(#[from] CrewError),

    #[error("Input file not found (looked in: {})", .candidates.join(", "))]
    MissingInputFile { candidates: Vec<String> },

    #[error("Input file '{0}' is empty")]
    EmptyInput(String),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// An input artifact resolved from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
    pub path: String,
    pub content: String,
}

/// Input for the RunPipeline use case
#[derive(Debug, Clone)]
pub struct RunPipelineInput {
    pub descriptor: PipelineDescriptor,
    /// Artifact text substituted into the stage descriptions
    pub artifact_text: String,
}

impl RunPipelineInput {
    pub fn new(descriptor: PipelineDescriptor, artifact_text: impl Into<String>) -> Self {
        Self {
            descriptor,
            artifact_text: artifact_text.into(),
        }
    }
}

/// Use case for running one transformation pipeline
pub struct RunPipelineUseCase<G: LlmGateway + 'static> {
    crew: RunCrewUseCase<G>,
    artifacts: Arc<dyn ArtifactStore>,
    models: ModelClientFactory,
    params: CrewParams,
    log: Arc<dyn ExecutionLogger>,
}

impl<G: LlmGateway + 'static> RunPipelineUseCase<G> {
    pub fn new(
        gateway: Arc<G>,
        artifacts: Arc<dyn ArtifactStore>,
        models: ModelClientFactory,
        params: CrewParams,
    ) -> Self {
        Self {
            crew: RunCrewUseCase::new(gateway, Arc::clone(&artifacts), params.max_rpm),
            artifacts,
            models,
            params,
            log: Arc::new(NoExecutionLogger),
        }
    }

    /// Record crew events to `log`
    pub fn with_execution_log(mut self, log: Arc<dyn ExecutionLogger>) -> Self {
        self.log = log;
        self
    }

    /// Resolve the input artifact named `name` (without extension).
    ///
    /// Candidates from the descriptor are tried in order.
    pub async fn load_input(
        &self,
        descriptor: &PipelineDescriptor,
        name: &str,
    ) -> Result<LoadedInput, PipelineError> {
        let candidates = descriptor.input_candidates(name);
        for path in &candidates {
            if let Some(content) = self.artifacts.read(path).await? {
                if content.trim().is_empty() {
                    return Err(PipelineError::EmptyInput(path.clone()));
                }
                info!("Loaded input artifact {}", path);
                return Ok(LoadedInput {
                    path: path.clone(),
                    content,
                });
            }
        }
        Err(PipelineError::MissingInputFile { candidates })
    }

    /// Build the three-stage plan without touching the network.
    ///
    /// Every template lookup and every substitution happens here, so a missing
    /// template fails before any remote call.
    pub fn build_plan(
        &self,
        descriptor: &PipelineDescriptor,
        artifact_text: &str,
        templates: &TemplateSet,
    ) -> Result<CrewPlan, PipelineError> {
        // 1. near-deterministic handle for review/approval, exploratory one for drafting
        let llm_low = self
            .models
            .build(None, self.params.low_temperature, None)?;
        let llm_high = self
            .models
            .build(None, Some(self.params.high_temperature), None)?;

        let placeholder = descriptor.placeholder.as_str();
        let mut plan = CrewPlan::new();

        // 2-3. writer
        let writer = &descriptor.writer;
        let writer_agent = AgentFactory::build(&writer.agent, templates.agent(&writer.agent)?, llm_high)?;
        let writer_record = templates.task(&writer.task)?.with_substitution(
            &writer.task,
            "description",
            placeholder,
            artifact_text,
        )?;

        // 4. reviewer
        let reviewer = &descriptor.reviewer;
        let reviewer_agent = AgentFactory::build(
            &reviewer.agent,
            templates.agent(&reviewer.agent)?,
            llm_low.clone(),
        )?;
        let reviewer_record = templates.task(&reviewer.task)?.with_substitution(
            &reviewer.task,
            "description",
            placeholder,
            artifact_text,
        )?;

        // 5. manager
        let manager = &descriptor.manager;
        let manager_agent =
            AgentFactory::build(&manager.agent, templates.agent(&manager.agent)?, llm_low)?;
        let manager_record = templates.task(&manager.task)?.with_substitution(
            &manager.task,
            "description",
            placeholder,
            artifact_text,
        )?;

        let writer_draft = descriptor.draft_path(&writer.task);
        let writer_task = TaskFactory::build(
            &writer.task,
            &writer_record,
            &writer_agent,
            &[],
            writer_draft.as_deref(),
        )?;

        let reviewer_draft = descriptor.draft_path(&reviewer.task);
        let reviewer_task = TaskFactory::build(
            &reviewer.task,
            &reviewer_record,
            &reviewer_agent,
            &[&writer_task],
            reviewer_draft.as_deref(),
        )?;

        let artifact_path = descriptor.artifact_path();
        let final_task = TaskFactory::build(
            &manager.task,
            &manager_record,
            &manager_agent,
            &[&writer_task, &reviewer_task],
            Some(&artifact_path),
        )?;

        plan.add_agent(writer_agent)?;
        plan.add_agent(reviewer_agent)?;
        plan.add_agent(manager_agent)?;
        plan.add_task(writer_task)?;
        plan.add_task(reviewer_task)?;
        plan.add_task(final_task)?;

        Ok(plan)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunPipelineInput,
        templates: &TemplateSet,
    ) -> Result<PipelineResult, PipelineError> {
        self.execute_with_progress(input, templates, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunPipelineInput,
        templates: &TemplateSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<PipelineResult, PipelineError> {
        let descriptor = &input.descriptor;
        info!("Running {} pipeline", descriptor.kind);

        let result = self.run(descriptor, &input.artifact_text, templates, progress).await;
        if let Err(e) = &result {
            error!("{} pipeline failed: {}", descriptor.kind, e);
        }
        result
    }

    async fn run(
        &self,
        descriptor: &PipelineDescriptor,
        artifact_text: &str,
        templates: &TemplateSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<PipelineResult, PipelineError> {
        let plan = self.build_plan(descriptor, artifact_text, templates)?;
        let output = self
            .crew
            .execute_with_progress(&plan, self.log.as_ref(), progress)
            .await?;

        Ok(PipelineResult::new(
            descriptor.kind,
            descriptor.artifact_path(),
            output,
        ))
    }
}
