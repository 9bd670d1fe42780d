//! The three named mappings loaded from the template store.

use super::record::TemplateRecord;
use crate::core::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Agents, tasks and named output strings for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    pub agents: BTreeMap<String, TemplateRecord>,
    pub tasks: BTreeMap<String, TemplateRecord>,
    pub outputs: BTreeMap<String, String>,
}

impl TemplateSet {
    pub fn new(
        agents: BTreeMap<String, TemplateRecord>,
        tasks: BTreeMap<String, TemplateRecord>,
        outputs: BTreeMap<String, String>,
    ) -> Self {
        Self {
            agents,
            tasks,
            outputs,
        }
    }

    pub fn with_agent(mut self, name: impl Into<String>, record: TemplateRecord) -> Self {
        self.agents.insert(name.into(), record);
        self
    }

    pub fn with_task(mut self, name: impl Into<String>, record: TemplateRecord) -> Self {
        self.tasks.insert(name.into(), record);
        self
    }

    pub fn agent(&self, name: &str) -> Result<&TemplateRecord, TemplateError> {
        self.agents
            .get(name)
            .ok_or_else(|| TemplateError::MissingTemplate {
                kind: "agent",
                name: name.to_string(),
            })
    }

    pub fn task(&self, name: &str) -> Result<&TemplateRecord, TemplateError> {
        self.tasks
            .get(name)
            .ok_or_else(|| TemplateError::MissingTemplate {
                kind: "task",
                name: name.to_string(),
            })
    }
}
