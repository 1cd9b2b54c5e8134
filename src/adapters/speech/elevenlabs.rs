//! ElevenLabs text-to-speech adapter.
//!
//! `POST {base_url}/v1/text-to-speech/{voice_id}` with the API key in the
//! `xi-api-key` header; the response body is MPEG audio.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{SpeechAudio, SpeechError, SpeechRequest, SpeechSynthesizer};

#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    api_key: Secret<String>,
    pub voice_id: String,
    pub model_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ElevenLabsConfig {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            voice_id: voice_id.into(),
            model_id: "eleven_multilingual_v2".to_string(),
            base_url: "https://api.elevenlabs.io".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct ElevenLabsSynthesizer {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsSynthesizer {
    pub fn new(config: ElevenLabsConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        )
    }

    fn body<'a>(&'a self, request: &'a SpeechRequest) -> TtsRequest<'a> {
        TtsRequest {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: TtsVoiceSettings {
                stability: request.voice.stability,
                similarity_boost: request.voice.similarity_boost,
            },
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SpeechError> {
        tracing::debug!(chars = request.text.len(), voice = %self.config.voice_id, "Synthesizing speech");

        let response = self
            .client
            .post(self.synthesis_url())
            .header("xi-api-key", self.config.api_key.expose_secret())
            .header("Accept", "audio/mpeg")
            .json(&self.body(&request))
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => SpeechError::AuthenticationFailed,
                429 => SpeechError::RateLimited,
                code => SpeechError::Upstream {
                    status: code,
                    message,
                },
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        Ok(SpeechAudio::mpeg(bytes.to_vec()))
    }
}

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: TtsVoiceSettings,
}

#[derive(Debug, Serialize)]
struct TtsVoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::VoiceSettings;

    fn synthesizer() -> ElevenLabsSynthesizer {
        ElevenLabsSynthesizer::new(
            ElevenLabsConfig::new("key", "voice-123").with_base_url("https://tts.example/"),
        )
        .unwrap()
    }

    #[test]
    fn url_includes_voice_id() {
        assert_eq!(
            synthesizer().synthesis_url(),
            "https://tts.example/v1/text-to-speech/voice-123"
        );
    }

    #[test]
    fn body_carries_voice_settings() {
        let s = synthesizer();
        let request = SpeechRequest::new("Breathe deeply.").with_voice(VoiceSettings {
            stability: 0.25,
            similarity_boost: 0.5,
        });
        let json = serde_json::to_value(s.body(&request)).unwrap();

        assert_eq!(json["text"], "Breathe deeply.");
        assert_eq!(json["model_id"], "eleven_multilingual_v2");
        assert_eq!(json["voice_settings"]["stability"], 0.25);
        assert_eq!(json["voice_settings"]["similarity_boost"], 0.5);
    }
}
