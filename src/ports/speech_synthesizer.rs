//! Speech synthesis port.
//!
//! Converts an assistant reply into playable audio for Pro+ members.

use async_trait::async_trait;
use thiserror::Error;

/// Voice parameters sent with a synthesis request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: VoiceSettings,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: VoiceSettings::default(),
        }
    }

    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }
}

/// Encoded audio ready to stream to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl SpeechAudio {
    pub fn mpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: "audio/mpeg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech synthesis is disabled")]
    Disabled,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("synthesis failed with status {status}: {message}")]
    Upstream { status: u16, message: String },
}

/// Port for text-to-speech services.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SpeechError>;
}
