//! Agent and task factories: template record → typed instance.

use super::entities::{AgentId, AgentInstance, TaskId, TaskInstance};
use crate::core::error::TemplateError;
use crate::llm::ModelHandle;
use crate::template::TemplateRecord;

/// Builds [`AgentInstance`]s from agent template records
pub struct AgentFactory;

impl AgentFactory {
    /// Map `role`, `goal` and `backstory` (required) plus the optional
    /// `verbose` and `allow_delegation` flags onto an agent bound to `llm`.
    pub fn build(
        name: &str,
        record: &TemplateRecord,
        llm: ModelHandle,
    ) -> Result<AgentInstance, TemplateError> {
        Ok(AgentInstance {
            id: AgentId::new(name),
            role: record.require_text(name, "role")?.trim().to_string(),
            goal: record.require_text(name, "goal")?.trim().to_string(),
            backstory: record.require_text(name, "backstory")?.trim().to_string(),
            verbose: record.flag(name, "verbose")?.unwrap_or(false),
            allow_delegation: record.flag(name, "allow_delegation")?.unwrap_or(false),
            llm,
        })
    }
}

/// Builds [`TaskInstance`]s from task template records
///
/// Placeholder substitution is the caller's job; descriptions are copied
/// verbatim.
pub struct TaskFactory;

impl TaskFactory {
    pub fn build(
        name: &str,
        record: &TemplateRecord,
        agent: &AgentInstance,
        context: &[&TaskInstance],
        output_file: Option<&str>,
    ) -> Result<TaskInstance, TemplateError> {
        let output_file = output_file
            .map(str::to_string)
            .or_else(|| record.text("output_file").map(str::to_string))
            .filter(|p| !p.trim().is_empty());

        Ok(TaskInstance {
            id: TaskId::new(name),
            description: record.require_text(name, "description")?.to_string(),
            expected_output: record.require_text(name, "expected_output")?.to_string(),
            agent: agent.id.clone(),
            context: context.iter().map(|t| t.id.clone()).collect(),
            output_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ModelClientFactory;

    fn writer_record() -> TemplateRecord {
        TemplateRecord::new()
            .with("role", "IEEE Test Plan Writer")
            .with("goal", "Draft a complete test plan")
            .with("backstory", "Senior QA analyst")
    }

    fn handle() -> ModelHandle {
        ModelClientFactory::default().build(None, Some(0.6), None).unwrap()
    }

    #[test]
    fn test_agent_field_mapping() {
        let agent = AgentFactory::build(
            "ieee_writer",
            &writer_record().with("allow_delegation", false.to_string()),
            handle(),
        )
        .unwrap();
        assert_eq!(agent.id.as_str(), "ieee_writer");
        assert_eq!(agent.role, "IEEE Test Plan Writer");
        assert_eq!(agent.goal, "Draft a complete test plan");
        assert_eq!(agent.backstory, "Senior QA analyst");
        assert!(!agent.verbose);
        assert!(!agent.allow_delegation);
        assert_eq!(agent.llm.temperature, 0.6);
    }

    #[test]
    fn test_agent_missing_backstory() {
        let record = TemplateRecord::new()
            .with("role", "r")
            .with("goal", "g");
        let err = AgentFactory::build("ieee_writer", &record, handle()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingField {
                template: "ieee_writer".to_string(),
                field: "backstory".to_string(),
            }
        );
    }

    #[test]
    fn test_task_with_context_and_output() {
        let agent = AgentFactory::build("ieee_writer", &writer_record(), handle()).unwrap();
        let record = TemplateRecord::new()
            .with("description", "Write {feature_content}")
            .with("expected_output", "Plan");

        let first = TaskFactory::build("first", &record, &agent, &[], None).unwrap();
        let second =
            TaskFactory::build("second", &record, &agent, &[&first], Some("resposta/out.md"))
                .unwrap();

        // the factory never substitutes
        assert_eq!(first.description, "Write {feature_content}");
        assert!(first.context.is_empty());
        assert!(second.context.contains(&first.id));
        assert_eq!(second.output_file.as_deref(), Some("resposta/out.md"));
        assert_eq!(second.agent, agent.id);
    }

    #[test]
    fn test_task_output_file_from_record() {
        let agent = AgentFactory::build("w", &writer_record(), handle()).unwrap();
        let record = TemplateRecord::new()
            .with("description", "d")
            .with("expected_output", "e")
            .with("output_file", "etapas_geracao/w.md");
        let task = TaskFactory::build("t", &record, &agent, &[], None).unwrap();
        assert_eq!(task.output_file.as_deref(), Some("etapas_geracao/w.md"));
    }

    #[test]
    fn test_task_missing_expected_output() {
        let agent = AgentFactory::build("w", &writer_record(), handle()).unwrap();
        let record = TemplateRecord::new().with("description", "d");
        assert!(matches!(
            TaskFactory::build("t", &record, &agent, &[], None),
            Err(TemplateError::MissingField { ref field, .. }) if field == "expected_output"
        ));
    }
}
