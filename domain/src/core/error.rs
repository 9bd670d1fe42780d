//! Domain error types

use thiserror::Error;

/// Errors raised while resolving or materializing template records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Missing {kind} template '{name}'")]
    MissingTemplate { kind: &'static str, name: String },

    #[error("Template '{template}' is missing required field '{field}'")]
    MissingField { template: String, field: String },

    #[error("Template '{template}' has an invalid value for '{field}': {reason}")]
    InvalidField {
        template: String,
        field: String,
        reason: String,
    },

    #[error("Template '{template}' still contains placeholder '{{{placeholder}}}' after substitution")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

impl TemplateError {
    /// Check if this error represents an absent named template
    pub fn is_missing_template(&self) -> bool {
        matches!(self, TemplateError::MissingTemplate { .. })
    }
}

/// Errors raised while building model handles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised while assembling a crew plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Task '{task}' references unknown agent '{agent}'")]
    UnknownAgent { task: String, agent: String },

    #[error("Task '{task}' uses '{context}' as context before it was added")]
    UnknownContextTask { task: String, context: String },

    #[error("Task '{0}' was added twice")]
    DuplicateTask(String),

    #[error("Agent '{0}' was registered twice")]
    DuplicateAgent(String),

    #[error("Crew plan has no tasks")]
    Empty,
}
