//! Mock speech synthesizer for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{SpeechAudio, SpeechError, SpeechRequest, SpeechSynthesizer};

/// Returns fixed audio bytes, or a fixed error, and records requested text.
#[derive(Debug, Clone, Default)]
pub struct MockSpeechSynthesizer {
    failure: Option<SpeechError>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSpeechSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: SpeechError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn requested_texts(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SpeechError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.text.clone());
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(SpeechAudio::mpeg(b"ID3mock".to_vec())),
        }
    }
}

/// Synthesizer used when speech is not configured; always `Disabled`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for DisabledSpeechSynthesizer {
    async fn synthesize(&self, _request: SpeechRequest) -> Result<SpeechAudio, SpeechError> {
        Err(SpeechError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_text_and_returns_audio() {
        let mock = MockSpeechSynthesizer::new();
        let audio = mock.synthesize(SpeechRequest::new("hi")).await.unwrap();

        assert_eq!(audio.content_type, "audio/mpeg");
        assert_eq!(mock.requested_texts(), vec!["hi".to_string()]);
    }

    #[tokio::test]
    async fn disabled_synthesizer_always_fails() {
        let result = DisabledSpeechSynthesizer.synthesize(SpeechRequest::new("hi")).await;
        assert_eq!(result, Err(SpeechError::Disabled));
    }
}
