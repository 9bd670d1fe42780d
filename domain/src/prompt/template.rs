//! Prompt templates for crew task execution

use crate::crew::entities::{AgentInstance, TaskInstance};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt carrying the agent persona
    pub fn agent_system(agent: &AgentInstance) -> String {
        format!(
            r#"You are {role}. {backstory}
Your personal goal is: {goal}
Work only on the task you are given and answer with the final result itself, without preamble."#,
            role = agent.role,
            backstory = agent.backstory,
            goal = agent.goal,
        )
    }

    /// User prompt for a task, with upstream outputs as context
    ///
    /// `context` pairs are (producing agent role, raw output), in context order.
    pub fn task_prompt(task: &TaskInstance, context: &[(&str, &str)]) -> String {
        let mut prompt = format!(
            r#"Current Task: {}

This is the expected criteria for your final answer: {}
You MUST return the actual complete content as the final answer, not a summary."#,
            task.description.trim(),
            task.expected_output.trim()
        );

        if !context.is_empty() {
            prompt.push_str("\n\nThis is the context you're working with:\n");
            for (role, output) in context {
                prompt.push_str(&format!("\n--- Output from {} ---\n{}\n", role, output.trim()));
            }
        }

        prompt.push_str("\nBegin! This is VERY important to you, use the context given and produce your best final answer.");
        prompt
    }
}
