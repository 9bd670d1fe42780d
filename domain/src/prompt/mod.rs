//! Prompt rendering for agents and tasks.

pub mod template;

pub use template::PromptTemplate;
