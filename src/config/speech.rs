//! Text-to-speech configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// ElevenLabs settings. Speech is off unless `enabled` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,

    pub elevenlabs_api_key: Option<String>,

    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.elevenlabs_api_key.as_ref().is_some_and(|k| !k.is_empty()) {
            return Err(ValidationError::MissingRequired("SPEECH__ELEVENLABS_API_KEY"));
        }
        if self.voice_id.is_empty() {
            return Err(ValidationError::MissingRequired("SPEECH__VOICE_ID"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            elevenlabs_api_key: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// ElevenLabs "Rachel" premade voice.
fn default_voice_id() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default_and_valid_without_key() {
        let config = SpeechConfig::default();
        assert!(!config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_requires_key() {
        let config = SpeechConfig {
            enabled: true,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("SPEECH__ELEVENLABS_API_KEY"))
        );
    }

    #[test]
    fn test_enabled_with_key_is_valid() {
        let config = SpeechConfig {
            enabled: true,
            elevenlabs_api_key: Some("xi-key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
