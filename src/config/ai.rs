//! Chat-completion provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Which chat-completion source answers member messages.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenAI,
    /// Fixed rotating replies, no network.
    Canned,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProvider,

    pub openai_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Extra attempts for rate limits, 5xx and network errors
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Overrides the built-in assistant instruction
    pub system_prompt: Option<String>,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        match self.provider {
            AiProvider::OpenAI if !self.has_openai() => {
                Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"))
            }
            AiProvider::Canned if environment == Environment::Production => {
                Err(ValidationError::CannedProviderInProduction)
            }
            _ if self.timeout_secs == 0 => Err(ValidationError::InvalidTimeout),
            _ => Ok(()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
            system_prompt: None,
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    1
}

fn default_max_tokens() -> u32 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::OpenAI);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_openai_requires_key() {
        assert_eq!(
            AiConfig::default().validate(Environment::Development),
            Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"))
        );
        let config = AiConfig {
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate(Environment::Development).is_err());
    }

    #[test]
    fn test_canned_provider_needs_no_key_outside_production() {
        let config = AiConfig {
            provider: AiProvider::Canned,
            ..Default::default()
        };
        assert!(config.validate(Environment::Development).is_ok());
        assert_eq!(
            config.validate(Environment::Production),
            Err(ValidationError::CannedProviderInProduction)
        );
    }

    #[test]
    fn test_valid_openai_config() {
        let config = AiConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert!(config.validate(Environment::Production).is_ok());
    }
}
