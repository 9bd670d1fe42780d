//! Run Crew use case
//!
//! Executes a [`CrewPlan`] strictly in order: one task at a time, each
//! task's prompt carrying the outputs of its context tasks, every outbound
//! request passing through the requests-per-minute throttle.

use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::execution_logger::{ExecutionEvent, ExecutionLogger, NoExecutionLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::throttle::RequestThrottle;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use testcrew_domain::core::string::truncate;
use testcrew_domain::{CrewOutput, CrewPlan, Message, PlanError, PromptTemplate, TaskOutput};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during crew execution
#[derive(Error, Debug)]
pub enum CrewError {
    #[error("Invalid crew plan: {0}")]
    Plan(#[from] PlanError),

    #[error("Task '{task}' failed: {source}")]
    RemoteCallFailure {
        task: String,
        #[source]
        source: GatewayError,
    },

    #[error("Task '{task}' output could not be saved: {source}")]
    Artifact {
        task: String,
        #[source]
        source: ArtifactError,
    },
}

/// Use case for running a crew
pub struct RunCrewUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    artifacts: Arc<dyn ArtifactStore>,
    throttle: RequestThrottle,
}

impl<G: LlmGateway + 'static> RunCrewUseCase<G> {
    pub fn new(gateway: Arc<G>, artifacts: Arc<dyn ArtifactStore>, max_rpm: u32) -> Self {
        Self {
            gateway,
            artifacts,
            throttle: RequestThrottle::per_minute(max_rpm),
        }
    }

    /// Execute the plan with no log and no progress
    pub async fn execute(&self, plan: &CrewPlan) -> Result<CrewOutput, CrewError> {
        self.execute_with_progress(plan, &NoExecutionLogger, &NoProgress)
            .await
    }

    /// Execute the plan, recording events and reporting progress
    pub async fn execute_with_progress(
        &self,
        plan: &CrewPlan,
        log: &dyn ExecutionLogger,
        progress: &dyn ProgressNotifier,
    ) -> Result<CrewOutput, CrewError> {
        plan.ensure_runnable()?;

        let started = Instant::now();
        let total = plan.tasks().len();
        info!(
            "Starting crew: {} agents, {} tasks, max {} rpm",
            plan.agents().len(),
            total,
            self.throttle.limit()
        );
        log.log(ExecutionEvent::new(
            "crew_started",
            json!({
                "agents": plan.agents().iter().map(|a| a.role.as_str()).collect::<Vec<_>>(),
                "tasks": plan.tasks().iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
                "process": "sequential",
                "max_rpm": self.throttle.limit(),
            }),
        ));
        progress.on_crew_start(total);

        let mut outputs: Vec<TaskOutput> = Vec::with_capacity(total);

        for (position, task) in plan.tasks().iter().enumerate() {
            let agent = plan
                .agent(&task.agent)
                .ok_or_else(|| PlanError::UnknownAgent {
                    task: task.id.to_string(),
                    agent: task.agent.to_string(),
                })?;

            let context: Vec<(&str, &str)> = plan
                .context_indices(position)
                .iter()
                .map(|&i| (outputs[i].agent_role.as_str(), outputs[i].raw.as_str()))
                .collect();
            let messages = vec![
                Message::system(PromptTemplate::agent_system(agent)),
                Message::user(PromptTemplate::task_prompt(task, &context)),
            ];

            info!("Task {}/{}: {} ({})", position + 1, total, task.id, agent.role);
            progress.on_task_start(position, task, agent);
            log.log(ExecutionEvent::new(
                "task_started",
                json!({
                    "task": task.id.as_str(),
                    "agent": agent.role,
                    "model": agent.llm.model.as_str(),
                    "temperature": agent.llm.temperature,
                    "context": task.context.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                    "prompt": messages[1].content,
                }),
            ));

            let waited = self.throttle.acquire().await;
            if !waited.is_zero() {
                debug!("Waited {:.1}s for rate limit", waited.as_secs_f64());
            }

            let raw = match self.gateway.complete(&agent.llm, &messages).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Task {} failed: {}", task.id, e);
                    log.log(ExecutionEvent::new(
                        "task_failed",
                        json!({ "task": task.id.as_str(), "error": e.to_string() }),
                    ));
                    progress.on_task_complete(position, task, false);
                    return Err(CrewError::RemoteCallFailure {
                        task: task.id.to_string(),
                        source: e,
                    });
                }
            };

            let mut output = TaskOutput::new(task.id.clone(), agent.role.clone(), raw);
            if let Some(path) = &task.output_file {
                if let Err(e) = self.artifacts.write(path, &output.raw).await {
                    progress.on_task_complete(position, task, false);
                    return Err(CrewError::Artifact {
                        task: task.id.to_string(),
                        source: e,
                    });
                }
                debug!("Task {} output written to {}", task.id, path);
                output = output.with_output_file(path.clone());
            }

            log.log(ExecutionEvent::new(
                "task_completed",
                json!({
                    "task": task.id.as_str(),
                    "agent": agent.role,
                    "bytes": output.raw.len(),
                    "output_file": output.output_file,
                    "preview": truncate(&output.raw, 200),
                }),
            ));
            progress.on_task_complete(position, task, true);
            outputs.push(output);
        }

        let result = CrewOutput::new(outputs, started.elapsed());
        info!("Crew finished in {:.2}s", result.duration.as_secs_f64());
        log.log(ExecutionEvent::new(
            "crew_completed",
            json!({ "duration_secs": result.duration.as_secs_f64(), "bytes": result.raw.len() }),
        ));
        progress.on_crew_complete();

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryArtifacts, RecordingLogger, ScriptedGateway};
    use testcrew_domain::{AgentId, AgentInstance, ModelClientFactory, Role, TaskId, TaskInstance};

    fn agent(id: &str, role: &str) -> AgentInstance {
        AgentInstance {
            id: AgentId::new(id),
            role: role.to_string(),
            goal: "goal".to_string(),
            backstory: "backstory".to_string(),
            verbose: false,
            allow_delegation: false,
            llm: ModelClientFactory::default().build(None, None, None).unwrap(),
        }
    }

    fn task(id: &str, agent: &str, context: &[&str], output: Option<&str>) -> TaskInstance {
        TaskInstance {
            id: TaskId::new(id),
            description: format!("do {}", id),
            expected_output: "text".to_string(),
            agent: AgentId::new(agent),
            context: context.iter().map(|c| TaskId::new(*c)).collect(),
            output_file: output.map(str::to_string),
        }
    }

    fn three_stage_plan() -> CrewPlan {
        let mut plan = CrewPlan::new();
        plan.add_agent(agent("writer", "Writer")).unwrap();
        plan.add_agent(agent("reviewer", "Reviewer")).unwrap();
        plan.add_agent(agent("manager", "Manager")).unwrap();
        plan.add_task(task("write", "writer", &[], None)).unwrap();
        plan.add_task(task("review", "reviewer", &["write"], None))
            .unwrap();
        plan.add_task(task(
            "final",
            "manager",
            &["write", "review"],
            Some("resposta/final.md"),
        ))
        .unwrap();
        plan
    }

    #[tokio::test]
    async fn test_sequential_execution_feeds_context() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["DRAFT", "REVIEWED", "APPROVED"]));
        let artifacts = Arc::new(MemoryArtifacts::default());
        let use_case = RunCrewUseCase::new(gateway.clone(), artifacts.clone(), 0);

        let output = use_case.execute(&three_stage_plan()).await.unwrap();

        assert_eq!(output.raw, "APPROVED");
        assert_eq!(output.tasks_output.len(), 3);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0][0].role, Role::System);
        assert!(calls[0][0].content.contains("Writer"));
        assert!(!calls[0][1].content.contains("DRAFT"));
        assert!(calls[1][1].content.contains("DRAFT"));
        assert!(!calls[1][1].content.contains("REVIEWED"));
        assert!(calls[2][1].content.contains("DRAFT"));
        assert!(calls[2][1].content.contains("REVIEWED"));

        assert_eq!(
            artifacts.get("resposta/final.md").as_deref(),
            Some("APPROVED")
        );
        assert_eq!(
            output.tasks_output[2].output_file.as_deref(),
            Some("resposta/final.md")
        );
    }

    #[tokio::test]
    async fn test_remote_failure_aborts_run() {
        let gateway = Arc::new(ScriptedGateway::failing_at(1, vec!["DRAFT"]));
        let artifacts = Arc::new(MemoryArtifacts::default());
        let logger = RecordingLogger::default();
        let use_case = RunCrewUseCase::new(gateway.clone(), artifacts.clone(), 0);

        let err = use_case
            .execute_with_progress(&three_stage_plan(), &logger, &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, CrewError::RemoteCallFailure { ref task, .. } if task == "review"));
        // no retry, manager never runs
        assert_eq!(gateway.calls().len(), 2);
        assert!(artifacts.get("resposta/final.md").is_none());
        assert_eq!(
            logger.event_types(),
            vec!["crew_started", "task_started", "task_completed", "task_started", "task_failed"]
        );
    }

    #[tokio::test]
    async fn test_empty_plan_rejected() {
        let use_case = RunCrewUseCase::new(
            Arc::new(ScriptedGateway::new(vec![])),
            Arc::new(MemoryArtifacts::default()),
            10,
        );
        assert!(matches!(
            use_case.execute(&CrewPlan::new()).await,
            Err(CrewError::Plan(PlanError::Empty))
        ));
    }

    #[tokio::test]
    async fn test_log_records_full_run() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["a", "b", "c"]));
        let logger = RecordingLogger::default();
        let use_case = RunCrewUseCase::new(gateway, Arc::new(MemoryArtifacts::default()), 10);

        use_case
            .execute_with_progress(&three_stage_plan(), &logger, &NoProgress)
            .await
            .unwrap();

        let types = logger.event_types();
        assert_eq!(types.first(), Some(&"crew_started"));
        assert_eq!(types.last(), Some(&"crew_completed"));
        assert_eq!(types.iter().filter(|t| **t == "task_completed").count(), 3);
    }
}
