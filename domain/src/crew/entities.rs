//! Crew entities: agents and tasks as they exist inside a plan.

use crate::llm::ModelHandle;
use serde::{Deserialize, Serialize};

/// Identifier of an agent within a plan (the agent template name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a task within a plan (the task template name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reasoning agent: persona plus the model it talks through
#[derive(Debug, Clone, PartialEq)]
pub struct AgentInstance {
    pub id: AgentId,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub verbose: bool,
    pub allow_delegation: bool,
    pub llm: ModelHandle,
}

/// A unit of work bound to one agent
///
/// `context` lists upstream tasks, in order, whose outputs feed this task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInstance {
    pub id: TaskId,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentId,
    pub context: Vec<TaskId>,
    pub output_file: Option<String>,
}
