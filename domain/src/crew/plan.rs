//! Crew plan: the agent set and the task DAG.
//!
//! Context links are stored as an adjacency list over task indices. A task
//! can only reference tasks added before it, so insertion order is always a
//! valid topological order and cycles cannot be expressed.

use super::entities::{AgentId, AgentInstance, TaskId, TaskInstance};
use crate::core::error::PlanError;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CrewPlan {
    agents: Vec<AgentInstance>,
    agent_index: HashMap<AgentId, usize>,
    tasks: Vec<TaskInstance>,
    task_index: HashMap<TaskId, usize>,
    /// `edges[i]` holds the indices of the context tasks of `tasks[i]`
    edges: Vec<Vec<usize>>,
}

impl CrewPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_agent(&mut self, agent: AgentInstance) -> Result<&AgentInstance, PlanError> {
        if self.agent_index.contains_key(&agent.id) {
            return Err(PlanError::DuplicateAgent(agent.id.to_string()));
        }
        let idx = self.agents.len();
        self.agent_index.insert(agent.id.clone(), idx);
        self.agents.push(agent);
        Ok(&self.agents[idx])
    }

    pub fn add_task(&mut self, task: TaskInstance) -> Result<&TaskInstance, PlanError> {
        if self.task_index.contains_key(&task.id) {
            return Err(PlanError::DuplicateTask(task.id.to_string()));
        }
        if !self.agent_index.contains_key(&task.agent) {
            return Err(PlanError::UnknownAgent {
                task: task.id.to_string(),
                agent: task.agent.to_string(),
            });
        }

        let mut upstream = Vec::with_capacity(task.context.len());
        for ctx in &task.context {
            let idx = self
                .task_index
                .get(ctx)
                .ok_or_else(|| PlanError::UnknownContextTask {
                    task: task.id.to_string(),
                    context: ctx.to_string(),
                })?;
            upstream.push(*idx);
        }

        let idx = self.tasks.len();
        self.task_index.insert(task.id.clone(), idx);
        self.edges.push(upstream);
        self.tasks.push(task);
        Ok(&self.tasks[idx])
    }

    pub fn agents(&self) -> &[AgentInstance] {
        &self.agents
    }

    /// Tasks in execution order
    pub fn tasks(&self) -> &[TaskInstance] {
        &self.tasks
    }

    pub fn agent(&self, id: &AgentId) -> Option<&AgentInstance> {
        self.agent_index.get(id).map(|&i| &self.agents[i])
    }

    pub fn task(&self, id: &TaskId) -> Option<&TaskInstance> {
        self.task_index.get(id).map(|&i| &self.tasks[i])
    }

    /// Context indices of the task at `position`
    pub fn context_indices(&self, position: usize) -> &[usize] {
        self.edges.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The last task; its output is the result of the crew
    pub fn final_task(&self) -> Option<&TaskInstance> {
        self.tasks.last()
    }

    pub fn ensure_runnable(&self) -> Result<(), PlanError> {
        if self.tasks.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(())
    }
}
