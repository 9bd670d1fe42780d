//! Crew execution results.

use super::entities::TaskId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw output of one executed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task: TaskId,
    /// Role of the agent that produced the output
    pub agent_role: String,
    pub raw: String,
    /// File the output was written to, if the task was bound to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl TaskOutput {
    pub fn new(task: TaskId, agent_role: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            task,
            agent_role: agent_role.into(),
            raw: raw.into(),
            output_file: None,
        }
    }

    pub fn with_output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }
}

/// Aggregated result of a crew run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    /// Raw text of the final task
    pub raw: String,
    /// Every task output in execution order
    pub tasks_output: Vec<TaskOutput>,
    #[serde(with = "duration_secs")]
    pub duration: Duration,
}

impl CrewOutput {
    pub fn new(tasks_output: Vec<TaskOutput>, duration: Duration) -> Self {
        let raw = tasks_output
            .last()
            .map(|o| o.raw.clone())
            .unwrap_or_default();
        Self {
            raw,
            tasks_output,
            duration,
        }
    }

    pub fn output_of(&self, task: &TaskId) -> Option<&TaskOutput> {
        self.tasks_output.iter().find(|o| &o.task == task)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}
