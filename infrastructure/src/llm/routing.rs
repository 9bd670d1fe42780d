//! Endpoint routing by model prefix.
//!
//! `groq/…`, `gemini/…`, `openai/…` and `ollama/…` map to the provider's
//! OpenAI-compatible endpoint with the prefix stripped from the model name.
//! Unprefixed identifiers go to the configured base URL verbatim.

use testcrew_application::GatewayError;
use testcrew_domain::ModelId;

/// Provider endpoints known by prefix
pub const PROVIDERS: [(&str, &str); 4] = [
    ("groq", "https://api.groq.com/openai/v1"),
    ("gemini", "https://generativelanguage.googleapis.com/v1beta/openai"),
    ("openai", "https://api.openai.com/v1"),
    ("ollama", "http://localhost:11434/v1"),
];

/// Where a request for one model goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    /// Model name sent on the wire
    pub model: String,
}

impl Endpoint {
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Resolve the endpoint for `model`.
///
/// A prefix that names no known provider is rejected rather than forwarded
/// to the default endpoint.
pub fn resolve_endpoint(model: &ModelId, default_base_url: &str) -> Result<Endpoint, GatewayError> {
    match model.provider() {
        None => Ok(Endpoint {
            base_url: default_base_url.to_string(),
            model: model.name().to_string(),
        }),
        Some(provider) => PROVIDERS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(provider))
            .map(|(_, url)| Endpoint {
                base_url: url.to_string(),
                model: model.name().to_string(),
            })
            .ok_or_else(|| {
                GatewayError::ModelNotAvailable(format!(
                    "unknown provider '{}' in model '{}'",
                    provider, model
                ))
            }),
    }
}
