//! Model identifier value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier used when no model is configured anywhere
pub const DEFAULT_MODEL: &str = "gemini/gemini-2.0-flash-lite-001";

/// Identifier of an LLM model (Value Object)
///
/// Identifiers may carry a provider prefix (`groq/llama-3.3-70b-versatile`,
/// `gemini/gemini-2.0-flash-lite-001`). The prefix selects the endpoint and is
/// stripped before the name goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId {
    raw: String,
}

impl ModelId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Full identifier, including any provider prefix
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Provider prefix, if present
    pub fn provider(&self) -> Option<&str> {
        self.raw
            .split_once('/')
            .map(|(provider, _)| provider)
            .filter(|p| !p.is_empty())
    }

    /// Model name as understood by the provider
    pub fn name(&self) -> &str {
        match self.raw.split_once('/') {
            Some((provider, name)) if !provider.is_empty() => name,
            _ => &self.raw,
        }
    }
}

impl Default for ModelId {
    fn default() -> Self {
        ModelId::new(DEFAULT_MODEL)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelId::new(s))
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::new(s)
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ModelId::new(s))
    }
}
