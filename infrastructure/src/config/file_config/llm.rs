//! LLM configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

/// Raw LLM endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Chat completions endpoint for models without a provider prefix
    pub base_url: String,
    /// Environment variable holding the API key (default: "GROQ_API_KEY")
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Temperature for reviewer and manager agents (unset: model default)
    pub low_temperature: Option<f64>,
    /// Temperature for writer agents
    pub high_temperature: f64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            request_timeout_secs: 120,
            low_temperature: None,
            high_temperature: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_section_partial() {
        let toml_str = r#"
[llm]
api_key_env = "GEMINI_API_KEY"
low_temperature = 0.1
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.llm.low_temperature, Some(0.1));
        assert_eq!(config.llm.high_temperature, 0.6);
        assert_eq!(config.llm.request_timeout_secs, 120);
    }
}
