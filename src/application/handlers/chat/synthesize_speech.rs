//! SynthesizeSpeechHandler - audio for an assistant reply.

use std::sync::Arc;

use super::ChatError;
use crate::domain::chat::normalize_message;
use crate::domain::membership::Feature;
use crate::domain::session::SessionContext;
use crate::ports::{SpeechAudio, SpeechRequest, SpeechSynthesizer};

pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Audio for `text`, or `None` when synthesis failed. Failures are only
    /// logged; the member still has the text reply.
    pub async fn handle(
        &self,
        session: &SessionContext,
        text: &str,
    ) -> Result<Option<SpeechAudio>, ChatError> {
        session.require(Feature::VoiceResponses)?;
        let text = normalize_message(text)?;

        match self.synthesizer.synthesize(SpeechRequest::new(text)).await {
            Ok(audio) => Ok(Some(audio)),
            Err(e) => {
                tracing::warn!(user_id = %session.user_id(), "Speech synthesis failed: {}", e);
                Ok(None)
            }
        }
    }
}
