//! Model defaults from the process environment.
//!
//! Read once at startup; everything downstream receives the resulting
//! [`LlmSettings`] by value.

use testcrew_domain::LlmSettings;

/// Model identifier variable
pub const MODEL_VAR: &str = "LLM_MODEL";
/// Sampling temperature variable
pub const TEMPERATURE_VAR: &str = "LLM_TEMPERATURE";

/// Snapshot `LLM_MODEL`, `LLM_TEMPERATURE` and the key variable named by
/// `api_key_env`.
pub fn read_llm_settings(api_key_env: &str) -> LlmSettings {
    settings_from(api_key_env, |name| std::env::var(name).ok())
}

fn settings_from(api_key_env: &str, lookup: impl Fn(&str) -> Option<String>) -> LlmSettings {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    LlmSettings {
        model: get(MODEL_VAR),
        temperature: get(TEMPERATURE_VAR),
        api_key: get(api_key_env),
    }
}
