//! Model handle value object

use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}

/// Callable model configuration: identifier, sampling temperature, credential.
///
/// Stateless; cloned freely between agents of the same run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHandle {
    pub model: ModelId,
    pub temperature: f64,
    #[serde(skip_serializing)]
    pub credential: Option<Credential>,
}

impl ModelHandle {
    pub fn new(model: ModelId, temperature: f64, credential: Option<Credential>) -> Self {
        Self {
            model,
            temperature,
            credential,
        }
    }
}
