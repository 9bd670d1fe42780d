//! Domain layer for testcrew
//!
//! This crate contains the core entities and value objects. It has no
//! dependencies on infrastructure or presentation concerns and never reads
//! the process environment.
//!
//! # Core Concepts
//!
//! ## Templates
//!
//! Agent and task definitions are loosely typed [`TemplateRecord`]s grouped in
//! a [`TemplateSet`]. Description templates carry a `{placeholder}` that is
//! replaced by the input artifact text before a task is built.
//!
//! ## Crew
//!
//! A [`CrewPlan`] holds the agents and an acyclic task graph. Tasks name their
//! upstream context tasks by [`TaskId`]; insertion order is execution order.
//!
//! ## Pipelines
//!
//! Every transformation is a writer → reviewer → manager chain described by a
//! [`PipelineDescriptor`].

pub mod core;
pub mod crew;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod session;
pub mod template;

// Re-export commonly used types
pub use crate::core::{
    error::{ConfigError, PlanError, TemplateError},
    model::{DEFAULT_MODEL, ModelId},
};
pub use crew::{
    entities::{AgentId, AgentInstance, TaskId, TaskInstance},
    factory::{AgentFactory, TaskFactory},
    plan::CrewPlan,
    value_objects::{CrewOutput, TaskOutput},
};
pub use llm::{Credential, DEFAULT_TEMPERATURE, LlmSettings, ModelClientFactory, ModelHandle};
pub use pipeline::{PipelineDescriptor, PipelineKind, PipelineResult, StageTemplates};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
pub use template::{TemplateRecord, TemplateSet, TemplateValue};
