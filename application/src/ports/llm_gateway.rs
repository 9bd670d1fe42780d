//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use testcrew_domain::{Message, ModelHandle};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer. Each call is a
/// single stateless completion; the handle carries model, temperature and
/// credential.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the conversation and return the assistant's text
    async fn complete(&self, llm: &ModelHandle, messages: &[Message])
    -> Result<String, GatewayError>;
}
