//! Model defaults captured from the process environment.

use serde::{Deserialize, Serialize};

/// Raw model defaults, read once at startup and injected into
/// [`ModelClientFactory`](super::factory::ModelClientFactory).
///
/// Values stay textual so that parsing errors surface at build time,
/// where the factory can report them as `InvalidConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// `LLM_MODEL`
    pub model: Option<String>,
    /// `LLM_TEMPERATURE`
    pub temperature: Option<String>,
    /// Provider API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl LlmSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
