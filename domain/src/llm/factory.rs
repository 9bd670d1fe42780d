//! Model Client Factory

use super::handle::{Credential, ModelHandle};
use super::settings::LlmSettings;
use crate::core::error::ConfigError;
use crate::core::model::{DEFAULT_MODEL, ModelId};

/// Temperature used when neither an explicit value nor a setting is given
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Builds [`ModelHandle`]s, filling gaps from injected [`LlmSettings`].
#[derive(Debug, Clone, Default)]
pub struct ModelClientFactory {
    settings: LlmSettings,
}

impl ModelClientFactory {
    pub fn new(settings: LlmSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    /// Build a handle.
    ///
    /// - model: explicit, else settings, else [`DEFAULT_MODEL`]; blank counts as unset
    /// - temperature: explicit, else settings (parsed), else [`DEFAULT_TEMPERATURE`]
    /// - credential: explicit, else settings; blank counts as unset and it may stay absent
    pub fn build(
        &self,
        model: Option<&str>,
        temperature: Option<f64>,
        credential: Option<&str>,
    ) -> Result<ModelHandle, ConfigError> {
        let model = [model, self.settings.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL);

        let temperature = match temperature {
            Some(t) => Self::check_temperature(t)?,
            None => match self.settings.temperature.as_deref() {
                Some(raw) => Self::parse_temperature(raw)?,
                None => DEFAULT_TEMPERATURE,
            },
        };

        let credential = [credential, self.settings.api_key.as_deref()]
            .into_iter()
            .flatten()
            .find(|k| !k.is_empty())
            .map(Credential::new);

        Ok(ModelHandle::new(ModelId::new(model), temperature, credential))
    }

    /// Parse a textual temperature
    pub fn parse_temperature(raw: &str) -> Result<f64, ConfigError> {
        let value: f64 = raw.trim().parse().map_err(|_| {
            ConfigError::InvalidConfiguration(format!(
                "Temperature must be a float, got '{}'",
                raw
            ))
        })?;
        Self::check_temperature(value)
    }

    fn check_temperature(value: f64) -> Result<f64, ConfigError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::InvalidConfiguration(format!(
                "Temperature must be a finite float, got {}",
                value
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_settings() {
        let handle = ModelClientFactory::default().build(None, None, None).unwrap();
        assert_eq!(handle.model.as_str(), "gemini/gemini-2.0-flash-lite-001");
        assert_eq!(handle.temperature, 0.0);
        assert!(handle.credential.is_none());
    }

    #[test]
    fn test_settings_fill_gaps() {
        let settings = LlmSettings::default()
            .with_model("groq/llama-3.3-70b-versatile")
            .with_temperature("0.25")
            .with_api_key("gsk_test");
        let handle = ModelClientFactory::new(settings)
            .build(None, None, None)
            .unwrap();
        assert_eq!(handle.model.as_str(), "groq/llama-3.3-70b-versatile");
        assert_eq!(handle.temperature, 0.25);
        assert_eq!(handle.credential.unwrap().expose(), "gsk_test");
    }

    #[test]
    fn test_explicit_values_win() {
        let settings = LlmSettings::default()
            .with_model("groq/a")
            .with_temperature("0.1");
        let handle = ModelClientFactory::new(settings)
            .build(Some("openai/gpt-4o-mini"), Some(0.6), Some("sk-explicit"))
            .unwrap();
        assert_eq!(handle.model.as_str(), "openai/gpt-4o-mini");
        assert_eq!(handle.temperature, 0.6);
        assert_eq!(handle.credential.unwrap().expose(), "sk-explicit");
    }

    #[test]
    fn test_blank_model_falls_back_to_default() {
        let settings = LlmSettings::default().with_model("");
        let handle = ModelClientFactory::new(settings)
            .build(Some("  "), None, None)
            .unwrap();
        assert_eq!(handle.model.as_str(), DEFAULT_MODEL);
    }

    #[test]
    fn test_blank_credential_falls_back_to_settings() {
        let settings = LlmSettings::default().with_api_key("gsk_env");
        let factory = ModelClientFactory::new(settings);

        let handle = factory.build(None, None, Some("")).unwrap();
        assert_eq!(handle.credential.unwrap().expose(), "gsk_env");

        let bare = ModelClientFactory::default().build(None, None, Some("")).unwrap();
        assert!(bare.credential.is_none());
    }

    #[test]
    fn test_unparseable_temperature_is_invalid_configuration() {
        let settings = LlmSettings::default().with_temperature("abc");
        let err = ModelClientFactory::new(settings)
            .build(None, None, None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_explicit_temperature_skips_bad_setting() {
        let settings = LlmSettings::default().with_temperature("abc");
        let handle = ModelClientFactory::new(settings)
            .build(None, Some(0.6), None)
            .unwrap();
        assert_eq!(handle.temperature, 0.6);
    }

    #[test]
    fn test_non_finite_temperature_rejected() {
        assert!(ModelClientFactory::parse_temperature("NaN").is_err());
        assert!(
            ModelClientFactory::default()
                .build(None, Some(f64::INFINITY), None)
                .is_err()
        );
    }
}
